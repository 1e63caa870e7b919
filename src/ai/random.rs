use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::{Agent, SavedState};

/// Random agent configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomConfig {
    /// Fixed RNG seed; entropy from the OS when unset.
    pub seed: Option<u64>,
}

/// An agent that selects uniformly at random from legal actions.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &RandomConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn generate_move(
        &mut self,
        board: &Board,
        _player: Player,
        saved_state: Option<SavedState>,
    ) -> Result<(usize, Option<SavedState>), AgentError> {
        let actions = board.legal_actions();
        if actions.is_empty() {
            return Err(AgentError::NoLegalMoves);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok((actions[idx], saved_state))
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameState, COLS, ROWS};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply_action(0, Player::Red).unwrap();
        }
        let legal = board.legal_actions();

        for _ in 0..100 {
            let (action, _) = agent.generate_move(&board, Player::Yellow, None).unwrap();
            assert!(legal.contains(&action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let player = state.current_player();
            let (action, _) = if turn % 2 == 0 {
                agent1.generate_move(state.board(), player, None).unwrap()
            } else {
                agent2.generate_move(state.board(), player, None).unwrap()
            };
            state = state.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.result().is_some());
        assert!(turn <= ROWS * COLS);
    }

    #[test]
    fn test_seeded_agents_agree() {
        let board = Board::new();
        let mut a = RandomAgent::with_seed(42);
        let mut b = RandomAgent::from_config(&RandomConfig { seed: Some(42) });
        for _ in 0..20 {
            let (x, _) = a.generate_move(&board, Player::Red, None).unwrap();
            let (y, _) = b.generate_move(&board, Player::Red, None).unwrap();
            assert_eq!(x, y);
        }
    }

    #[test]
    fn test_saved_state_passes_through() {
        let mut agent = RandomAgent::with_seed(1);
        let state = SavedState { data: vec![1, 2, 3] };
        let (_, returned) = agent
            .generate_move(&Board::new(), Player::Red, Some(state.clone()))
            .unwrap();
        assert_eq!(returned, Some(state));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.apply_action(col, Player::Red).unwrap();
            }
        }
        let mut agent = RandomAgent::with_seed(3);
        assert!(matches!(
            agent.generate_move(&board, Player::Yellow, None),
            Err(AgentError::NoLegalMoves)
        ));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
