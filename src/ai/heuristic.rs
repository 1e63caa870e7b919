use crate::game::{windows, Board, Cell, Player, CENTER_COL, CONNECT_N, ROWS};

/// Bonus per own piece in the center column.
pub const CENTER_WEIGHT: i32 = 3;
/// Window fully owned by the player.
pub const FOUR_SCORE: i32 = 100;
/// Three own pieces and one empty cell.
pub const THREE_SCORE: i32 = 5;
/// Two own pieces and two empty cells.
pub const TWO_SCORE: i32 = 2;
/// Three opponent pieces and one empty cell.
pub const OPPONENT_THREE_PENALTY: i32 = -4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default heuristic: center-column bonus plus a score for every 4-cell
/// window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        score(board, player)
    }
}

/// Score a single window for `player`. Windows that match none of the
/// patterns, including mixed windows, score 0.
pub fn score_window(window: &[Cell; CONNECT_N], player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();
    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = CONNECT_N - own - opp;

    match (own, opp, empty) {
        (4, _, _) => FOUR_SCORE,
        (3, _, 1) => THREE_SCORE,
        (2, _, 2) => TWO_SCORE,
        (_, 3, 1) => OPPONENT_THREE_PENALTY,
        _ => 0,
    }
}

/// Static evaluation of `board` for `player`.
pub fn score(board: &Board, player: Player) -> i32 {
    let own_cell = player.to_cell();

    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as i32
        * CENTER_WEIGHT;

    let windows_total: i32 = windows()
        .map(|window| score_window(&board.window_cells(&window), player))
        .sum();

    center + windows_total
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Cell = Cell::Empty;
    const R: Cell = Cell::Red;
    const Y: Cell = Cell::Yellow;

    #[test]
    fn window_values() {
        assert_eq!(score_window(&[R, R, R, R], Player::Red), 100);
        assert_eq!(score_window(&[R, E, R, R], Player::Red), 5);
        assert_eq!(score_window(&[E, R, E, R], Player::Red), 2);
        assert_eq!(score_window(&[Y, Y, E, Y], Player::Red), -4);
        assert_eq!(score_window(&[R, Y, R, Y], Player::Red), 0);
        assert_eq!(score_window(&[R, R, R, Y], Player::Red), 0);
        assert_eq!(score_window(&[E, E, E, R], Player::Red), 0);
        assert_eq!(score_window(&[E, E, E, E], Player::Red), 0);
    }

    #[test]
    fn window_values_are_player_relative() {
        assert_eq!(score_window(&[Y, Y, Y, Y], Player::Yellow), 100);
        assert_eq!(score_window(&[Y, Y, Y, Y], Player::Red), 0);
        assert_eq!(score_window(&[R, R, R, E], Player::Yellow), -4);
    }

    #[test]
    fn empty_board_is_zero() {
        let board = Board::new();
        assert_eq!(score(&board, Player::Red), 0);
        assert_eq!(score(&board, Player::Yellow), 0);
    }

    #[test]
    fn center_piece_bonus() {
        let mut board = Board::new();
        board.apply_action(CENTER_COL, Player::Red).unwrap();
        assert_eq!(score(&board, Player::Red), 3);
        // Opponent center pieces are not penalised
        assert_eq!(score(&board, Player::Yellow), 0);
    }

    #[test]
    fn center_preference() {
        let mut board_center = Board::new();
        board_center.apply_action(3, Player::Red).unwrap();
        let mut board_edge = Board::new();
        board_edge.apply_action(0, Player::Red).unwrap();

        let h = WindowHeuristic;
        assert!(h.evaluate(&board_center, Player::Red) > h.evaluate(&board_edge, Player::Red));
    }

    #[test]
    fn three_in_a_row_bottom_left() {
        let mut board = Board::new();
        for col in 0..3 {
            board.apply_action(col, Player::Red).unwrap();
        }
        // Bottom row: window 0..4 has three own + empty (+5), window 1..5 has
        // two own + two empty (+2). No center piece.
        assert_eq!(score(&board, Player::Red), 7);
        // Yellow sees the three-with-a-gap threat
        assert_eq!(score(&board, Player::Yellow), -4);
    }
}
