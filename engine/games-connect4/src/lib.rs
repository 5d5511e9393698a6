//! Connect 4 rules engine.
//!
//! Connect 4 is a two-player connection game where players drop discs into
//! a vertically suspended grid. The objective is to be the first to form a
//! horizontal, vertical, or diagonal line of four discs.
//!
//! The engine is parametric in height and width; [`Board::standard`] gives
//! the usual 6-row, 7-column game.
//!
//! # Board Layout
//!
//! Cells are stored in row-major order with row 0 at the TOP, which is also
//! the layout of the external grid returned by [`Board::to_grid`]:
//! ```text
//! Row 0: [ 0][ 1][ 2][ 3][ 4][ 5][ 6]  <- Top
//! Row 1: [ 7][ 8][ 9][10][11][12][13]
//! Row 2: [14][15][16][17][18][19][20]
//! Row 3: [21][22][23][24][25][26][27]
//! Row 4: [28][29][30][31][32][33][34]
//! Row 5: [35][36][37][38][39][40][41]  <- Bottom
//!         Col 0  1  2  3  4  5  6
//! ```
//!
//! Cell values: 0 = empty, 1 = player one, 2 = player two.
//!
//! Whose turn it is is never stored. It is derived from the piece counts:
//! equal counts mean player one is to move.
//!
//! # Usage
//!
//! ```rust
//! use games_connect4::{Board, Player};
//!
//! let board = Board::standard();
//! let board = board.apply_move(3);
//! assert_eq!(board.next_to_move(), Player::Two);
//! assert_eq!(board.legal_moves().len(), 7);
//! ```

use thiserror::Error;

/// Standard board dimensions
pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of discs in a line needed to win
pub const CONNECT: usize = 4;

/// Widest supported board; legal moves are packed into a `u64` mask.
pub const MAX_WIDTH: usize = 64;

/// Tallest supported board; column heights are tracked as `u8`.
pub const MAX_HEIGHT: usize = u8::MAX as usize;

/// Errors raised by the strict board operations and grid decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Invalid board dimensions {height}x{width}")]
    InvalidDimensions { height: usize, width: usize },

    #[error("Column {column} is outside the board (width {width})")]
    ColumnOutOfRange { column: usize, width: usize },

    #[error("Column {0} is full")]
    ColumnFull(usize),

    #[error("Invalid cell value {value} at row {row}, column {column}")]
    InvalidCell { row: usize, column: usize, value: u8 },

    #[error("Row {row} has {actual} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Piece at row {row}, column {column} is floating above an empty cell")]
    FloatingPiece { row: usize, column: usize },

    #[error("Unreachable piece counts: player one has {one}, player two has {two}")]
    InvalidPieceCounts { one: usize, two: usize },

    #[error("Both players have four in a row")]
    BothPlayersWon,
}

/// A Connect 4 player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// The other player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Cell value used for this player's discs.
    #[inline]
    pub fn as_cell(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(other),
        }
    }
}

/// Direction vectors (row, column): vertical, horizontal, diagonal \, diagonal /
const AXES: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Connect 4 board.
///
/// Boards are values: every move returns a new board and leaves the
/// original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    /// Row-major cells, row 0 at the top
    cells: Vec<u8>,
    /// Number of discs in each column
    column_heights: Vec<u8>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    pub fn new(height: usize, width: usize) -> Result<Self, BoardError> {
        if height == 0 || width == 0 || height > MAX_HEIGHT || width > MAX_WIDTH {
            return Err(BoardError::InvalidDimensions { height, width });
        }

        Ok(Self {
            height,
            width,
            cells: vec![0; height * width],
            column_heights: vec![0; width],
        })
    }

    /// Create an empty 6x7 board.
    pub fn standard() -> Self {
        Self {
            height: ROWS,
            width: COLS,
            cells: vec![0; ROWS * COLS],
            column_heights: vec![0; COLS],
        }
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Convert row and column to a cell index
    #[inline]
    fn pos(&self, row: usize, column: usize) -> usize {
        row * self.width + column
    }

    /// Cell value at (row, column), row 0 being the top row.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the board.
    #[inline]
    pub fn cell(&self, row: usize, column: usize) -> u8 {
        self.cells[self.pos(row, column)]
    }

    /// Whether a disc can no longer be dropped into `column`.
    /// Columns outside the board count as full.
    #[inline]
    pub fn is_column_full(&self, column: usize) -> bool {
        column >= self.width || self.column_heights[column] as usize >= self.height
    }

    /// Drop a disc for the player to move into `column` and return the new board.
    ///
    /// A full (or nonexistent) column is not an error: the board is returned
    /// unchanged. Callers that need to tell the difference compare the result
    /// with the input or use [`Board::try_apply_move`].
    pub fn apply_move(&self, column: usize) -> Board {
        if self.is_column_full(column) {
            return self.clone();
        }

        let mut next = self.clone();
        let row = self.height - 1 - self.column_heights[column] as usize;
        let pos = self.pos(row, column);
        next.cells[pos] = self.next_to_move().as_cell();
        next.column_heights[column] += 1;
        next
    }

    /// Strict variant of [`Board::apply_move`] for drivers validating input.
    pub fn try_apply_move(&self, column: usize) -> Result<Board, BoardError> {
        if column >= self.width {
            return Err(BoardError::ColumnOutOfRange {
                column,
                width: self.width,
            });
        }
        if self.is_column_full(column) {
            return Err(BoardError::ColumnFull(column));
        }
        Ok(self.apply_move(column))
    }

    /// Columns whose top cell is empty, in ascending order.
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&column| !self.is_column_full(column))
            .collect()
    }

    /// Bit-mask representation of legal moves.
    ///
    /// Bit `c` is set when column `c` still accepts a disc.
    pub fn legal_moves_mask(&self) -> u64 {
        self.column_heights
            .iter()
            .enumerate()
            .fold(0u64, |mask, (column, &height)| {
                if (height as usize) < self.height {
                    mask | (1u64 << column)
                } else {
                    mask
                }
            })
    }

    /// Number of discs `player` has on the board.
    pub fn count(&self, player: Player) -> usize {
        let cell = player.as_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Total number of discs on the board.
    pub fn pieces_played(&self) -> usize {
        self.column_heights.iter().map(|&h| h as usize).sum()
    }

    /// Player whose turn it is, derived from piece counts.
    pub fn next_to_move(&self) -> Player {
        if self.count(Player::One) == self.count(Player::Two) {
            Player::One
        } else {
            Player::Two
        }
    }

    /// Whether `player` has four discs in a row anywhere on the board.
    pub fn has_won(&self, player: Player) -> bool {
        let cell = player.as_cell();

        for row in 0..self.height {
            for column in 0..self.width {
                if self.cell(row, column) != cell {
                    continue;
                }
                for (dr, dc) in AXES {
                    if self.extends(row, column, dr, dc, cell)
                        || self.extends(row, column, -dr, -dc, cell)
                    {
                        return true;
                    }
                }
            }
        }

        false
    }

    /// Whether the CONNECT - 1 cells stepping away from (row, column) along
    /// (dr, dc) all hold `cell`. Stops at the board edge.
    fn extends(&self, row: usize, column: usize, dr: isize, dc: isize, cell: u8) -> bool {
        (1..CONNECT as isize).all(|k| {
            let r = row as isize + dr * k;
            let c = column as isize + dc * k;
            r >= 0
                && c >= 0
                && (r as usize) < self.height
                && (c as usize) < self.width
                && self.cell(r as usize, c as usize) == cell
        })
    }

    /// Winner of the game, if any.
    pub fn winner(&self) -> Option<Player> {
        if self.has_won(Player::One) {
            Some(Player::One)
        } else if self.has_won(Player::Two) {
            Some(Player::Two)
        } else {
            None
        }
    }

    fn is_full(&self) -> bool {
        self.column_heights
            .iter()
            .all(|&h| h as usize >= self.height)
    }

    /// No player has won and no empty cell remains.
    pub fn is_draw(&self) -> bool {
        self.is_full() && self.winner().is_none()
    }

    /// Either player has won or the game is drawn.
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// External grid representation: row-major, top row first.
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.cells
            .chunks(self.width)
            .map(|row| row.to_vec())
            .collect()
    }

    /// Decode an external grid, rejecting boards no legal game can reach.
    pub fn from_grid(grid: &[Vec<u8>]) -> Result<Board, BoardError> {
        let height = grid.len();
        let width = grid.first().map_or(0, |row| row.len());
        let mut board = Board::new(height, width)?;

        for (row, cells) in grid.iter().enumerate() {
            if cells.len() != width {
                return Err(BoardError::RaggedGrid {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            for (column, &value) in cells.iter().enumerate() {
                if value > 2 {
                    return Err(BoardError::InvalidCell { row, column, value });
                }
                let pos = board.pos(row, column);
                board.cells[pos] = value;
            }
        }

        // Reconstruct column heights; discs must rest on discs or the floor
        for column in 0..width {
            let mut filled = 0u8;
            for row in (0..height).rev() {
                if board.cell(row, column) == 0 {
                    continue;
                }
                if height - 1 - row != filled as usize {
                    return Err(BoardError::FloatingPiece { row, column });
                }
                filled += 1;
            }
            board.column_heights[column] = filled;
        }

        let one = board.count(Player::One);
        let two = board.count(Player::Two);
        if one != two && one != two + 1 {
            return Err(BoardError::InvalidPieceCounts { one, two });
        }

        if board.has_won(Player::One) && board.has_won(Player::Two) {
            return Err(BoardError::BothPlayersWon);
        }

        Ok(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
