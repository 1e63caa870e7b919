//! Core Connect Four game logic: board representation, player types, text
//! rendering, and the game state machine used by the match runner.

mod board;
mod player;
pub mod render;
mod state;

pub use board::{
    initialize_board, windows, Board, Cell, GameOutcome, LegalActions, MoveError, Window,
    CENTER_COL, COLS, CONNECT_N, ROWS,
};
pub use player::Player;
pub use render::{parse, render, ParseBoardError};
pub use state::{GameResult, GameState};
