use super::{Board, LegalActions, MoveError, Player};

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Winner(Player),
    Draw,
}

impl GameResult {
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(player) => Some(player),
            GameResult::Draw => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    result: Option<GameResult>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            result: None,
        }
    }

    /// Resume from an arbitrary board with `current_player` to move.
    pub fn from_board(board: Board, current_player: Player) -> Self {
        let result = match board.winner() {
            Some(player) => Some(GameResult::Winner(player)),
            None if board.is_full() => Some(GameResult::Draw),
            None => None,
        };
        GameState {
            board,
            current_player,
            result,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game result if game is over
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.result.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }
        self.board.legal_actions()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let mut new_board = self.board;
        let row = new_board.apply_action(column, self.current_player)?;

        // Check for win
        let result = if new_board.check_win(row, column) {
            Some(GameResult::Winner(self.current_player))
        } else if new_board.is_full() {
            Some(GameResult::Draw)
        } else {
            None
        };

        Ok(GameState {
            board: new_board,
            current_player: self.current_player.other(),
            result,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.board().get(5, 3), Cell::Red);
        // Source state unchanged
        assert_eq!(state.board().piece_count(), 0);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (different row)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.result(), Some(GameResult::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_full_column_rejected() {
        let mut state = GameState::initial();
        for _ in 0..6 {
            state = state.apply_move(0).unwrap();
        }
        assert_eq!(state.apply_move(0), Err(MoveError::ColumnFull(0)));
    }

    #[test]
    fn test_from_board_detects_winner() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.apply_action(2, Player::Yellow).unwrap();
        }
        let state = GameState::from_board(board, Player::Red);
        assert_eq!(state.result(), Some(GameResult::Winner(Player::Yellow)));
        assert_eq!(state.result().and_then(GameResult::winner), Some(Player::Yellow));
    }
}
