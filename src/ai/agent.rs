use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::game::{Board, LegalActions, Player};

/// Opaque state an agent may hand back to the driving loop and receive again
/// on its next move. The bundled agents pass it through untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedState {
    pub data: Vec<u8>,
}

/// Universal interface for all agents.
pub trait Agent {
    /// Choose a column for `player` on `board`. The returned column is always
    /// one of `board.legal_actions()`.
    fn generate_move(
        &mut self,
        board: &Board,
        player: Player,
        saved_state: Option<SavedState>,
    ) -> Result<(usize, Option<SavedState>), AgentError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// Which agent to build from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AgentKind {
    Random,
    Minimax,
    Mcts,
}

impl AgentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentKind::Random => "random",
            AgentKind::Minimax => "minimax",
            AgentKind::Mcts => "mcts",
        }
    }
}

/// Legal columns of a position that is still being played.
///
/// Fails with [`AgentError::NoLegalMoves`] when the board is full or either
/// player already has four in a row.
pub fn playable_actions(board: &Board) -> Result<LegalActions, AgentError> {
    if board.winner().is_some() {
        return Err(AgentError::NoLegalMoves);
    }
    let legal = board.legal_actions();
    if legal.is_empty() {
        return Err(AgentError::NoLegalMoves);
    }
    Ok(legal)
}
