mod agent;
pub mod heuristic;
pub mod mcts;
pub mod minimax;
mod random;

pub use agent::{playable_actions, Agent, AgentKind, SavedState};
pub use heuristic::{score, score_window, Heuristic, WindowHeuristic};
pub use mcts::{MctsAgent, MctsConfig, SearchReport, MAX_TIME_BUDGET_SECS};
pub use minimax::{MinimaxAgent, MinimaxConfig, WIN_SCORE};
pub use random::{RandomAgent, RandomConfig};

use crate::config::AppConfig;

/// Build a boxed agent of the given kind from the application config.
pub fn build_agent(kind: AgentKind, config: &AppConfig) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::from_config(&config.random)),
        AgentKind::Minimax => Box::new(MinimaxAgent::from_config(&config.minimax)),
        AgentKind::Mcts => Box::new(MctsAgent::from_config(&config.mcts)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_agent_names() {
        let config = AppConfig::default();
        assert_eq!(build_agent(AgentKind::Random, &config).name(), "Random");
        assert_eq!(build_agent(AgentKind::Minimax, &config).name(), "Minimax");
        assert_eq!(build_agent(AgentKind::Mcts, &config).name(), "MCTS");
    }
}
