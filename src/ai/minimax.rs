use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::game::{Board, GameOutcome, Player};

use super::agent::{playable_actions, Agent, SavedState};
use super::heuristic::{Heuristic, WindowHeuristic};

/// Score of a decided position. Dominates any heuristic value.
pub const WIN_SCORE: i32 = 10_000_000;

/// Minimax agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Search depth in plies.
    pub depth: usize,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig { depth: 4 }
    }
}

/// Depth-limited minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    pub fn from_config(config: &MinimaxConfig) -> Self {
        Self::new(config.depth)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Best column for `player`. Ties go to the lowest column.
    pub fn choose_action(&self, board: &Board, player: Player) -> Result<usize, AgentError> {
        let legal = playable_actions(board)?;

        let mut search = Search {
            agent: player,
            heuristic: self.heuristic.as_ref(),
            nodes: 0,
        };
        let (action, score) =
            search.minimax(board, self.depth.max(1), i32::MIN, i32::MAX, player)?;
        let action = action.unwrap_or(legal[0]);

        debug!(
            "minimax: {} plays column {action} (score {score}, depth {}, {} nodes)",
            player.name(),
            self.depth,
            search.nodes
        );
        Ok(action)
    }
}

/// One search invocation: the agent's identity and counters.
struct Search<'a> {
    agent: Player,
    heuristic: &'a dyn Heuristic,
    nodes: u64,
}

impl Search<'_> {
    /// Returns the best action at this ply (None at leaves) and its score
    /// from the agent's perspective.
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        to_move: Player,
    ) -> Result<(Option<usize>, i32), AgentError> {
        self.nodes += 1;

        // Only the player who just moved can have completed a four
        let last_mover = to_move.other();
        match board.classify(last_mover) {
            GameOutcome::Win if last_mover == self.agent => return Ok((None, WIN_SCORE)),
            GameOutcome::Win => return Ok((None, -WIN_SCORE)),
            GameOutcome::Draw => return Ok((None, 0)),
            GameOutcome::Ongoing => {}
        }

        if depth == 0 {
            return Ok((None, self.heuristic.evaluate(board, self.agent)));
        }

        let maximizing = to_move == self.agent;
        let mut best_action = None;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in board.legal_actions() {
            let child = board.with_action(col, to_move)?;
            let (_, score) = self.minimax(&child, depth - 1, alpha, beta, to_move.other())?;

            if maximizing {
                if score > best || best_action.is_none() {
                    best = score;
                    best_action = Some(col);
                }
                alpha = alpha.max(best);
            } else {
                if score < best || best_action.is_none() {
                    best = score;
                    best_action = Some(col);
                }
                beta = beta.min(best);
            }

            if alpha >= beta {
                break;
            }
        }

        Ok((best_action, best))
    }
}

impl Agent for MinimaxAgent {
    fn generate_move(
        &mut self,
        board: &Board,
        player: Player,
        saved_state: Option<SavedState>,
    ) -> Result<(usize, Option<SavedState>), AgentError> {
        let action = self.choose_action(board, player)?;
        Ok((action, saved_state))
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
