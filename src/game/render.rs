//! Text rendering of a board and the inverse parser, used for debugging
//! output and for building test fixtures.
//!
//! ```text
//! |==============|
//! |              |
//! |              |
//! |    X X       |
//! |    O X X     |
//! |  O X O O     |
//! |  O O X X     |
//! |==============|
//! |0 1 2 3 4 5 6 |
//! ```

use std::fmt;
use std::str::FromStr;

use super::{Board, Cell, Player, COLS, ROWS};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBoardError {
    #[error("expected {expected} board rows between the borders, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("missing border line before the board rows")]
    MissingBorder,

    #[error("row {row} is malformed: {line:?}")]
    MalformedRow { row: usize, line: String },

    #[error("unknown piece {piece:?} at row {row}, column {col}")]
    UnknownPiece { row: usize, col: usize, piece: char },

    #[error("piece at row {row}, column {col} has an empty cell below it")]
    FloatingPiece { row: usize, col: usize },
}

fn border() -> String {
    format!("|{}|", "=".repeat(2 * COLS))
}

/// Render `board` with the bottom row printed last.
pub fn render(board: &Board) -> String {
    let border = border();
    let mut out = String::new();
    out.push_str(&border);
    out.push('\n');

    for row in 0..ROWS {
        out.push('|');
        for col in 0..COLS {
            match Player::from_cell(board.get(row, col)) {
                Some(player) => {
                    out.push(player.symbol());
                    out.push(' ');
                }
                None => out.push_str("  "),
            }
        }
        out.push_str("|\n");
    }

    out.push_str(&border);
    out.push('\n');
    out.push('|');
    for col in 0..COLS {
        out.push_str(&format!("{col} "));
    }
    out.push_str("|\n");
    out
}

/// Parse the output of [`render`] back into a board. The column footer is
/// optional.
pub fn parse(text: &str) -> Result<Board, ParseBoardError> {
    let border = border();
    let mut lines = text.lines().map(|line| line.trim_end_matches('\r'));

    // Skip leading blank lines, then expect the top border
    match lines.by_ref().find(|line| !line.trim().is_empty()) {
        Some(line) if line.trim() == border => {}
        _ => return Err(ParseBoardError::MissingBorder),
    }

    let rows: Vec<&str> = lines.take_while(|line| line.trim() != border).collect();
    if rows.len() != ROWS {
        return Err(ParseBoardError::RowCount {
            expected: ROWS,
            found: rows.len(),
        });
    }

    let mut cells = [[Cell::Empty; COLS]; ROWS];
    for (row, line) in rows.iter().enumerate() {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() != 2 * COLS + 2 || chars[0] != '|' || chars[chars.len() - 1] != '|' {
            return Err(ParseBoardError::MalformedRow {
                row,
                line: line.to_string(),
            });
        }
        for col in 0..COLS {
            if chars[2 + 2 * col] != ' ' {
                return Err(ParseBoardError::MalformedRow {
                    row,
                    line: line.to_string(),
                });
            }
            let piece = chars[1 + 2 * col];
            cells[row][col] = match piece {
                ' ' => Cell::Empty,
                'X' => Cell::Red,
                'O' => Cell::Yellow,
                other => {
                    return Err(ParseBoardError::UnknownPiece {
                        row,
                        col,
                        piece: other,
                    })
                }
            };
        }
    }

    for row in 0..ROWS - 1 {
        for col in 0..COLS {
            if cells[row][col] != Cell::Empty && cells[row + 1][col] == Cell::Empty {
                return Err(ParseBoardError::FloatingPiece { row, col });
            }
        }
    }

    Ok(Board::from_cells(cells))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
