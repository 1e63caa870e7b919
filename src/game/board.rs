use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Pieces in a row needed to win.
pub const CONNECT_N: usize = 4;
pub const CENTER_COL: usize = COLS / 2;

/// Columns that can still receive a piece, in ascending order.
pub type LegalActions = Vec<usize>;

/// Coordinates `(row, col)` of one contiguous run of `CONNECT_N` cells.
pub type Window = [(usize, usize); CONNECT_N];

/// Row/column steps for horizontal, vertical, `\` and `/` runs.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// Status of a board from the point of view of the player who just moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win,
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),
    #[error("column {0} is out of range")]
    InvalidColumn(usize),
    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from raw rows. Row 0 is the top.
    pub(crate) fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns whose top cell is still empty.
    pub fn legal_actions(&self) -> LegalActions {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece for `player` in place, returns the row where it landed
    pub fn apply_action(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull(col));
        }

        // Find the lowest empty row in this column
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(col))?;
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Copying variant of [`Board::apply_action`]; `self` is left untouched.
    pub fn with_action(&self, col: usize, player: Player) -> Result<Board, MoveError> {
        let mut next = *self;
        next.apply_action(col, player)?;
        Ok(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// The four cells of a window, in order.
    pub fn window_cells(&self, window: &Window) -> [Cell; CONNECT_N] {
        window.map(|(row, col)| self.cells[row][col])
    }

    /// True if `player` owns four contiguous cells anywhere on the board.
    pub fn is_connect_four(&self, player: Player) -> bool {
        let cell = player.to_cell();
        windows().any(|window| self.window_cells(&window).iter().all(|&c| c == cell))
    }

    /// Classify the board for the player whose last move is being evaluated.
    /// Only `player`'s four-in-a-row is checked.
    pub fn classify(&self, player: Player) -> GameOutcome {
        if self.is_connect_four(player) {
            GameOutcome::Win
        } else if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::Ongoing
        }
    }

    /// The player with four in a row, if any. Red is checked first.
    pub fn winner(&self) -> Option<Player> {
        [Player::Red, Player::Yellow]
            .into_iter()
            .find(|&player| self.is_connect_four(player))
    }

    /// Check if the last move at (row, col) resulted in a win
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let cell = self.get(row, col);
        if cell == Cell::Empty {
            return false;
        }

        DIRECTIONS.iter().any(|&(dr, dc)| {
            1 + self.run_length(row, col, dr, dc, cell) + self.run_length(row, col, -dr, -dc, cell)
                >= CONNECT_N
        })
    }

    /// Count matching cells walking away from (row, col), excluding the start.
    fn run_length(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while r >= 0
            && c >= 0
            && (r as usize) < ROWS
            && (c as usize) < COLS
            && self.cells[r as usize][c as usize] == cell
        {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Empty starting board.
pub fn initialize_board() -> Board {
    Board::new()
}

/// Every contiguous run of `CONNECT_N` cells: horizontal, vertical and both
/// diagonals.
pub fn windows() -> impl Iterator<Item = Window> {
    DIRECTIONS.into_iter().flat_map(|(dr, dc)| {
        (0..ROWS).flat_map(move |row| {
            (0..COLS).filter_map(move |col| window_at(row, col, dr, dc))
        })
    })
}

fn window_at(row: usize, col: usize, dr: isize, dc: isize) -> Option<Window> {
    let mut window = [(0, 0); CONNECT_N];
    for (i, slot) in window.iter_mut().enumerate() {
        let r = row as isize + dr * i as isize;
        let c = col as isize + dc * i as isize;
        if r < 0 || c < 0 || r >= ROWS as isize || c >= COLS as isize {
            return None;
        }
        *slot = (r as usize, c as usize);
    }
    Some(window)
}
