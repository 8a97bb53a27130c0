use std::fmt;

use super::Player;
use crate::error::{BoardError, MoveError};

pub const DEFAULT_HEIGHT: usize = 6;
pub const DEFAULT_WIDTH: usize = 7;

/// Number of same-player cells in a line needed to win.
pub const CONNECT: usize = 4;

/// Run directions as (d_row, d_col): horizontal, vertical, diagonal down-right,
/// diagonal down-left. Row 0 is the top, so "down" is increasing row.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

/// A `height` x `width` grid stored row-major. Row 0 is the top row, so pieces
/// settle towards row `height - 1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero. Such a board is full before the
    /// first move, so no game on it could ever end.
    pub fn new(height: usize, width: usize) -> Self {
        assert!(
            height > 0 && width > 0,
            "board dimensions must be non-zero, got {height}x{width}"
        );
        Board {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether (row, col) lies on the board. Takes signed coordinates so run
    /// scans can step off the left edge.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && (row as usize) < self.height && (col as usize) < self.width
    }

    /// Get the cell at a specific position
    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Out-of-bounds coordinates are never empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        matches!(self.cell_at(row, col), Ok(Cell::Empty))
    }

    /// Lowest empty row in `col`, scanning bottom-up. `None` when the column is
    /// full or does not exist.
    pub fn find_drop_row(&self, col: usize) -> Option<usize> {
        if col >= self.width {
            return None;
        }
        (0..self.height).rev().find(|&row| self.is_empty(row, col))
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        self.find_drop_row(col).is_none()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Number of occupied cells
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell != Cell::Empty).count()
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// This ignores turn order, so it can stack pieces of one player.
    pub fn drop_piece(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= self.width {
            return Err(MoveError::InvalidColumn {
                column: col as isize,
                width: self.width,
            });
        }

        let row = self.find_drop_row(col).ok_or(MoveError::ColumnFull(col))?;
        let i = row * self.width + col;
        self.cells[i] = Cell::Occupied(player);
        Ok(row)
    }

    /// Whether `player` owns a run of [`CONNECT`] cells anywhere on the board.
    pub fn has_win(&self, player: Player) -> bool {
        let target = Cell::Occupied(player);
        (0..self.height).any(|row| {
            (0..self.width).any(|col| {
                DIRECTIONS
                    .iter()
                    .any(|&(dr, dc)| self.is_run(row as isize, col as isize, dr, dc, target))
            })
        })
    }

    /// Whether the [`CONNECT`] cells starting at (row, col) and stepping by
    /// (dr, dc) are all in bounds and all equal to `target`.
    fn is_run(&self, row: isize, col: isize, dr: isize, dc: isize, target: Cell) -> bool {
        (0..CONNECT as isize).all(|k| {
            let (r, c) = (row + k * dr, col + k * dc);
            self.in_bounds(r, c) && self.cells[r as usize * self.width + c as usize] == target
        })
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.height || col >= self.width {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => '1',
                    Cell::Occupied(Player::Two) => '2',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
