//! Time-bounded Monte Carlo Tree Search with UCT selection and uniformly
//! random rollouts.
//!
//! Each call to [`MctsAgent::choose_action`] builds a fresh [`SearchTree`]
//! rooted at the given board and repeats
//! selection → expansion → simulation → backpropagation until the time
//! budget runs out. Rewards are scored from the searching agent's point of
//! view at every node on the path (+1 win, −1 loss, 0 draw); they are not
//! negated between plies.

mod node;
mod tree;

pub use node::{MctsNode, NodeId};
pub use tree::SearchTree;

use std::time::{Duration, Instant};

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::agent::{playable_actions, Agent, SavedState};

/// Largest accepted per-move budget, in seconds (one day).
pub const MAX_TIME_BUDGET_SECS: f64 = 86_400.0;

/// MCTS agent configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MctsConfig {
    /// Wall-clock budget per move, in seconds.
    pub time_budget_secs: f64,
    /// Optional cap on iterations per move.
    pub max_iterations: Option<usize>,
    /// Fixed RNG seed; entropy from the OS when unset.
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        MctsConfig {
            time_budget_secs: 20.0,
            max_iterations: None,
            seed: None,
        }
    }
}

impl MctsConfig {
    /// Budget as a `Duration`. Negative or NaN values map to zero and values
    /// too large to represent saturate.
    pub fn time_budget(&self) -> Duration {
        if self.time_budget_secs.is_nan() || self.time_budget_secs <= 0.0 {
            return Duration::ZERO;
        }
        Duration::try_from_secs_f64(self.time_budget_secs).unwrap_or(Duration::MAX)
    }
}

/// Summary of one search, returned alongside the chosen column.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub action: usize,
    pub iterations: usize,
    pub tree_size: usize,
    pub elapsed: Duration,
}

/// Monte Carlo Tree Search agent.
pub struct MctsAgent {
    time_budget: Duration,
    max_iterations: Option<usize>,
    rng: StdRng,
}

impl MctsAgent {
    pub fn new(time_budget: Duration) -> Self {
        MctsAgent {
            time_budget,
            max_iterations: None,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_config(config: &MctsConfig) -> Self {
        MctsAgent {
            time_budget: config.time_budget(),
            max_iterations: config.max_iterations,
            rng: match config.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            },
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    /// Best column for `player` within the configured budget.
    pub fn choose_action(&mut self, board: &Board, player: Player) -> Result<usize, AgentError> {
        self.search(board, player).map(|report| report.action)
    }

    /// Run a full search and report its statistics.
    ///
    /// The root is always fully expanded before the deadline is honoured, so
    /// every legal column has a child to compare, even with a zero budget.
    pub fn search(&mut self, board: &Board, player: Player) -> Result<SearchReport, AgentError> {
        playable_actions(board)?;

        let start = Instant::now();
        let mut tree = SearchTree::new(*board, player.other());
        let root = tree.root();
        let mut iterations = 0usize;

        loop {
            if tree.get(root).is_fully_expanded() {
                let out_of_time = start.elapsed() >= self.time_budget;
                let out_of_iterations = self.max_iterations.is_some_and(|max| iterations >= max);
                if out_of_time || out_of_iterations {
                    break;
                }
            }

            let mut leaf = tree.select();
            if !tree.get(leaf).untried.is_empty() {
                leaf = tree.expand(leaf, &mut self.rng)?;
            }

            let (leaf_board, leaf_mover) = {
                let node = tree.get(leaf);
                (node.board, node.mover)
            };
            let winner = rollout(&leaf_board, leaf_mover, &mut self.rng)?;
            tree.backpropagate(leaf, reward(winner, player));
            iterations += 1;
        }

        let action = tree.best_action().ok_or(AgentError::NoLegalMoves)?;
        let report = SearchReport {
            action,
            iterations,
            tree_size: tree.len(),
            elapsed: start.elapsed(),
        };
        debug!(
            "mcts: {} plays column {} after {} iterations ({} nodes, {:?})",
            player.name(),
            report.action,
            report.iterations,
            report.tree_size,
            report.elapsed
        );
        Ok(report)
    }
}

impl Agent for MctsAgent {
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
        "MCTS"
    }
}

/// Play uniformly random moves from `board` until someone connects four or
/// the board fills up. `last_mover` made the move that produced `board`.
/// Returns the winner, or `None` for a draw.
pub fn rollout<R: Rng + ?Sized>(
    board: &Board,
    last_mover: Player,
    rng: &mut R,
) -> Result<Option<Player>, AgentError> {
    if board.is_connect_four(last_mover) {
        return Ok(Some(last_mover));
    }

    let mut board = *board;
    let mut current = last_mover;
    loop {
        let legal = board.legal_actions();
        if legal.is_empty() {
            return Ok(None);
        }
        current = current.other();
        let col = legal[rng.random_range(0..legal.len())];
        let row = board.apply_action(col, current)?;
        if board.check_win(row, col) {
            return Ok(Some(current));
        }
    }
}

/// Reward from `agent`'s perspective for a rollout won by `winner`.
pub fn reward(winner: Option<Player>, agent: Player) -> f64 {
    match winner {
        Some(player) if player == agent => 1.0,
        Some(_) => -1.0,
        None => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{parse, GameState, COLS, ROWS};

    fn seeded(max_iterations: usize) -> MctsAgent {
        MctsAgent::new(Duration::from_secs(60))
            .with_seed(11)
            .with_max_iterations(max_iterations)
    }

    #[test]
    fn reward_signs() {
        assert_eq!(reward(Some(Player::Red), Player::Red), 1.0);
        assert_eq!(reward(Some(Player::Yellow), Player::Red), -1.0);
        assert_eq!(reward(None, Player::Red), 0.0);
    }

    #[test]
    fn rollout_reports_existing_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_action(5, Player::Yellow).unwrap();
        }
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            rollout(&board, Player::Yellow, &mut rng).unwrap(),
            Some(Player::Yellow)
        );
    }

    #[test]
    fn rollout_terminates_with_consistent_result() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..50 {
            let result = rollout(&Board::new(), Player::Yellow, &mut rng).unwrap();
            assert!(matches!(result, None | Some(Player::Red) | Some(Player::Yellow)));
        }
    }

    #[test]
    fn takes_immediate_win_with_zero_budget() {
        // Red: three in the bottom row with column 3 open
        let board = parse(
            "\
|==============|
|              |
|              |
|              |
|              |
|O O O         |
|X X X         |
|==============|
",
        )
        .unwrap();
        let mut agent = MctsAgent::new(Duration::ZERO).with_seed(1);
        let report = agent.search(&board, Player::Red).unwrap();
        assert_eq!(report.action, 3);
        // One iteration per root action is enough to decide
        assert_eq!(report.iterations, 7);
    }

    #[test]
    fn zero_budget_still_returns_legal_column() {
        let mut board = Board::new();
        for _ in 0..ROWS / 2 {
            board.apply_action(0, Player::Red).unwrap();
            board.apply_action(0, Player::Yellow).unwrap();
        }
        let mut agent = MctsAgent::new(Duration::ZERO).with_seed(2);
        let action = agent.choose_action(&board, Player::Red).unwrap();
        assert!(board.legal_actions().contains(&action));
        assert_ne!(action, 0);
    }

    #[test]
    fn iteration_cap_bounds_search() {
        let mut agent = seeded(200);
        let report = agent.search(&Board::new(), Player::Red).unwrap();
        assert_eq!(report.iterations, 200);
        assert!(report.tree_size <= 201);
        assert!(report.action < COLS);
    }

    #[test]
    fn rejects_decided_board() {
        let mut board = Board::new();
        for col in 0..4 {
            board.apply_action(col, Player::Red).unwrap();
        }
        let mut agent = seeded(10);
        assert!(matches!(
            agent.choose_action(&board, Player::Yellow),
            Err(AgentError::NoLegalMoves)
        ));
    }

    #[test]
    fn from_config_reads_budget() {
        let config = MctsConfig {
            time_budget_secs: 0.5,
            max_iterations: Some(3),
            seed: Some(4),
        };
        let agent = MctsAgent::from_config(&config);
        assert_eq!(agent.time_budget(), Duration::from_millis(500));
        assert_eq!(agent.name(), "MCTS");
    }

    #[test]
    fn oversized_budget_saturates() {
        let config = MctsConfig {
            time_budget_secs: 1e20,
            ..Default::default()
        };
        assert_eq!(config.time_budget(), Duration::MAX);
        let config = MctsConfig {
            time_budget_secs: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(config.time_budget(), Duration::MAX);
    }

    #[test]
    fn plays_full_game_against_random() {
        let mut mcts = seeded(300);
        let mut random = RandomAgent::with_seed(8);
        let mut state = GameState::initial();
        let saved = Some(SavedState { data: vec![7] });

        while !state.is_terminal() {
            let player = state.current_player();
            let action = if player == Player::Red {
                let (action, returned) = mcts
                    .generate_move(state.board(), player, saved.clone())
                    .unwrap();
                assert_eq!(returned, saved);
                action
            } else {
                random.generate_move(state.board(), player, None).unwrap().0
            };
            state = state.apply_move(action).unwrap();
        }
        assert!(state.result().is_some());
    }
}
