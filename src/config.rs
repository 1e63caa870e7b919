use std::path::Path;

use log::warn;

use crate::ai::{MctsConfig, MinimaxConfig, RandomConfig, MAX_TIME_BUDGET_SECS};
use crate::arena::ArenaConfig;
use crate::error::ConfigError;
use crate::game::{COLS, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub minimax: MinimaxConfig,
    pub mcts: MctsConfig,
    pub random: RandomConfig,
    pub arena: ArenaConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.minimax.depth == 0 {
            return Err(ConfigError::Validation(
                "minimax.depth must be >= 1".into(),
            ));
        }
        if self.minimax.depth > ROWS * COLS {
            return Err(ConfigError::Validation(format!(
                "minimax.depth must be <= {}",
                ROWS * COLS
            )));
        }
        if !self.mcts.time_budget_secs.is_finite() || self.mcts.time_budget_secs <= 0.0 {
            return Err(ConfigError::Validation(
                "mcts.time_budget_secs must be > 0".into(),
            ));
        }
        if self.mcts.time_budget_secs > MAX_TIME_BUDGET_SECS {
            return Err(ConfigError::Validation(format!(
                "mcts.time_budget_secs must be <= {MAX_TIME_BUDGET_SECS}"
            )));
        }
        if self.mcts.max_iterations == Some(0) {
            return Err(ConfigError::Validation(
                "mcts.max_iterations must be >= 1".into(),
            ));
        }
        if self.arena.games == 0 {
            return Err(ConfigError::Validation(
                "arena.games must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
