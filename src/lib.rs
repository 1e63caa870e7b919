//! # Connect Four Agents
//!
//! Game-playing agents for standard Connect Four (6 rows, 7 columns): a
//! depth-limited minimax search with alpha-beta pruning and a window-based
//! heuristic, a time-bounded Monte-Carlo Tree Search, and a uniform random
//! baseline. A match runner pits any two agents against each other.
//!
//! ## Modules
//!
//! - [`game`]: board, player, text rendering, game state machine
//! - [`ai`]: agent trait, heuristic evaluation, minimax, MCTS, random agent
//! - [`arena`]: game and match runner, result aggregation
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: structured error types
//! - [`logging`]: logger setup for the binary

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
