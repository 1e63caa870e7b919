use std::path::PathBuf;

use crate::game::MoveError;

/// Errors raised while an agent computes a move.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    #[error("no legal moves: the board is full or the game is already decided")]
    NoLegalMoves,

    #[error("search applied an invalid move: {0}")]
    Move(#[from] MoveError),
}

/// Errors that end a game between two agents.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("{agent} selected illegal column {column} (legal: {legal:?})")]
    IllegalMove {
        agent: String,
        column: usize,
        legal: Vec<usize>,
    },

    #[error("{agent} failed to produce a move: {source}")]
    Agent {
        agent: String,
        #[source]
        source: AgentError,
    },

    #[error("move rejected by the game state: {0}")]
    Move(#[from] MoveError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
