use std::fmt;

use tracing::debug;

use super::Player;
use crate::error::BoardError;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_RUN_LENGTH: usize = 4;

/// Largest grid a board will allocate
pub const MAX_CELLS: usize = 1 << 20;

/// One direction per axis: horizontal, vertical, and the two diagonals.
/// The opposite direction is scanned by negating the deltas.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Occupied(Player),
}

impl Cell {
    /// The player holding this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Character used when printing the board
    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(player) => player.glyph(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {column} is outside the board (0..{width})")]
    InvalidColumn { column: usize, width: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),
}

/// Result of a single move on the board.
///
/// A tie is not reported here: after a `Continue`, the caller checks
/// [`Board::empty_cell_count`] to see whether the grid filled up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Win,
    Continue,
    Invalid(PlacementError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    n: usize,
    cells: Vec<Vec<Cell>>,
    empty_cells: usize,
}

impl Board {
    /// Create an empty `width` x `height` board where `n` in a row wins.
    ///
    /// Fails when any dimension is zero, when the grid would exceed
    /// [`MAX_CELLS`], or when `n` cannot fit along either dimension.
    pub fn new(width: usize, height: usize, n: usize) -> Result<Self, BoardError> {
        if width == 0 {
            return Err(BoardError::ZeroWidth);
        }
        if height == 0 {
            return Err(BoardError::ZeroHeight);
        }
        if n == 0 {
            return Err(BoardError::ZeroRunLength);
        }
        let cell_count = width
            .checked_mul(height)
            .filter(|&count| count <= MAX_CELLS)
            .ok_or(BoardError::TooLarge { width, height })?;
        if n > width.max(height) {
            return Err(BoardError::RunTooLong { n, width, height });
        }

        Ok(Board {
            width,
            height,
            n,
            cells: vec![vec![Cell::Empty; width]; height],
            empty_cells: cell_count,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of aligned pieces needed to win
    pub fn run_length(&self) -> usize {
        self.n
    }

    pub fn empty_cell_count(&self) -> usize {
        self.empty_cells
    }

    /// Get the cell at a specific position, `None` when out of bounds.
    /// Row 0 is the top, row `height - 1` is the bottom
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Check if a column is full. Columns off the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.width {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells == 0
    }

    /// Columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.width)
            .filter(|&col| !self.is_column_full(col))
            .collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, PlacementError> {
        if col >= self.width {
            return Err(PlacementError::InvalidColumn {
                column: col,
                width: self.width,
            });
        }

        let row = (0..self.height)
            .rev()
            .find(|&row| self.cells[row][col] == Cell::Empty)
            .ok_or(PlacementError::ColumnFull(col))?;

        self.cells[row][col] = player.to_cell();
        self.empty_cells -= 1;
        debug!(row, col, player = %player, empty = self.empty_cells, "placed piece");
        Ok(row)
    }

    /// Drop `player`'s piece into `column` and report whether it won.
    ///
    /// An invalid move leaves the board untouched.
    pub fn play_move(&mut self, column: usize, player: Player) -> MoveOutcome {
        let row = match self.drop_piece(column, player) {
            Ok(row) => row,
            Err(err) => {
                debug!(column, player = %player, %err, "rejected move");
                return MoveOutcome::Invalid(err);
            }
        };

        if self.check_win(row, column) {
            debug!(row, column, player = %player, "winning move");
            MoveOutcome::Win
        } else {
            MoveOutcome::Continue
        }
    }

    /// Check if the piece at (row, col) is part of a run of `n`.
    ///
    /// Counts matching pieces on both sides of the cell along each axis, so a
    /// piece dropped into the middle of a run is detected as well as one
    /// placed at its end.
    pub fn check_win(&self, row: usize, col: usize) -> bool {
        let Some(player) = self.get(row, col).and_then(Cell::player) else {
            return false;
        };

        AXES.iter().any(|&(dr, dc)| {
            let count = 1
                + self.count_run(row, col, dr, dc, player)
                + self.count_run(row, col, -dr, -dc, player);
            count >= self.n
        })
    }

    /// Count consecutive `player` pieces stepping from (row, col), excluding
    /// the starting cell
    fn count_run(&self, row: usize, col: usize, dr: isize, dc: isize, player: Player) -> usize {
        let mut count = 0;
        let mut r = row as isize + dr;
        let mut c = col as isize + dc;
        while self.cell_at(r, c) == Some(player.to_cell()) {
            count += 1;
            r += dr;
            c += dc;
        }
        count
    }

    fn cell_at(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    /// First player found holding a run of `n` anywhere on the board
    pub fn winner(&self) -> Option<Player> {
        (0..self.height)
            .flat_map(|row| (0..self.width).map(move |col| (row, col)))
            .find(|&(row, col)| self.check_win(row, col))
            .and_then(|(row, col)| self.get(row, col))
            .and_then(Cell::player)
    }

    /// Text snapshot of the grid, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    /// The classic 7x6 Connect Four board
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            n: DEFAULT_RUN_LENGTH,
            cells: vec![vec![Cell::Empty; DEFAULT_WIDTH]; DEFAULT_HEIGHT],
            empty_cells: DEFAULT_WIDTH * DEFAULT_HEIGHT,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(|cell| cell.glyph().to_string()).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
