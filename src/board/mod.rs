//! The Game of Life board
//!
//! A [`Board`] is an immutable grid of alive/dead cells with a cached
//! population. New boards come from [`seed`] (random placement), [`step`]
//! (the next generation of an existing board), or the exact constructors
//! [`Board::from_cells`] and [`Board::from_rows`].
//!
//! # Modules
//!
//! - [`rules`]: neighbor counting and the B3/S23 transition
//! - [`seeding`]: random placement of the initial population

pub mod rules;
pub mod seeding;

pub use rules::{next_state, step};
pub use seeding::{seed, seed_with_strategy, SeedStrategy};

use crate::errors::LifeError;
use std::fmt;

/// Glyph used for live cells in the text form of a board
pub const LIVE_CHAR: char = 'X';

/// Glyph used for dead cells in the text form of a board
pub const DEAD_CHAR: char = '.';

/// Largest cell count a board may hold; a `Vec` cannot grow past `isize::MAX` bytes
pub const MAX_AREA: usize = isize::MAX as usize;

/// A rectangular grid of cells, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    population: usize,
}

impl Board {
    /// Create an all-dead board
    pub fn empty(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        let len = width
            .checked_mul(height)
            .filter(|&len| len <= MAX_AREA)
            .ok_or(LifeError::InvalidDimensions { width, height })?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LifeError::InvalidDimensions { width, height })?;
        cells.resize(len, false);

        Ok(Board {
            width,
            height,
            cells,
            population: 0,
        })
    }

    /// Create a board whose live cells are exactly `live` (as `(x, y)` pairs).
    ///
    /// Duplicate coordinates are counted once.
    pub fn from_cells<I>(width: usize, height: usize, live: I) -> Result<Self, LifeError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Board::empty(width, height)?;
        for (x, y) in live {
            if x >= width || y >= height {
                return Err(LifeError::CellOutOfBounds {
                    x,
                    y,
                    width,
                    height,
                });
            }
            board.set_alive(x, y);
        }
        Ok(board)
    }

    /// Parse a board from text rows.
    ///
    /// `X`, `#` and `O` are alive; anything else is dead.
    pub fn from_rows(rows: &[&str]) -> Result<Self, LifeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut board = Board::empty(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(LifeError::RaggedRows {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, c) in row.chars().enumerate() {
                if matches!(c, 'X' | '#' | 'O') {
                    board.set_alive(x, y);
                }
            }
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells on the board
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.population
    }

    /// Whether the cell at column `x`, row `y` is alive.
    ///
    /// Coordinates outside the board read as dead.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.cells[self.index(x, y)]
    }

    /// Iterate over rows, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.chunks(self.width)
    }

    /// Coordinates of every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Mark a cell alive. Only used while a board is being built.
    fn set_alive(&mut self, x: usize, y: usize) -> bool {
        let i = self.index(x, y);
        if self.cells[i] {
            return false;
        }
        self.cells[i] = true;
        self.population += 1;
        true
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                let c = if alive { LIVE_CHAR } else { DEAD_CHAR };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_is_all_dead() {
        let board = Board::empty(4, 3).unwrap();
        assert_eq!(board.area(), 12);
        assert_eq!(board.population(), 0);
        assert!(board.rows().all(|row| row.iter().all(|&c| !c)));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Board::empty(0, 5),
            Err(LifeError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(Board::empty(5, 0).is_err());
    }

    #[test]
    fn test_oversized_board_rejected() {
        // Product fits in usize but not in an allocation
        assert!(matches!(
            Board::empty(usize::MAX / 2, 2),
            Err(LifeError::InvalidDimensions { height: 2, .. })
        ));
        assert!(matches!(
            Board::empty(usize::MAX, 2),
            Err(LifeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_from_cells_counts_duplicates_once() {
        let board = Board::from_cells(3, 3, [(0, 0), (2, 1), (0, 0)]).unwrap();
        assert_eq!(board.population(), 2);
        assert!(board.get(0, 0));
        assert!(board.get(2, 1));
        assert!(!board.get(1, 1));
    }

    #[test]
    fn test_from_cells_rejects_out_of_bounds() {
        let err = Board::from_cells(3, 3, [(3, 0)]).unwrap_err();
        assert!(matches!(err, LifeError::CellOutOfBounds { x: 3, y: 0, .. }));
    }

    #[test]
    fn test_from_rows_and_display() {
        let board = Board::from_rows(&[".X.", "#..", "..O"]).unwrap();
        assert_eq!(board.width(), 3);
        assert_eq!(board.height(), 3);
        assert_eq!(board.population(), 3);
        assert_eq!(board.to_string(), ".X.\nX..\n..X");
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        let err = Board::from_rows(&["...", ".."]).unwrap_err();
        assert!(matches!(
            err,
            LifeError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn test_get_outside_board_is_dead() {
        let board = Board::from_rows(&["XX", "XX"]).unwrap();
        assert!(!board.get(2, 0));
        assert!(!board.get(0, 2));
    }

    #[test]
    fn test_live_cells_row_major() {
        let board = Board::from_rows(&["..X", "X.."]).unwrap();
        let live: Vec<_> = board.live_cells().collect();
        assert_eq!(live, vec![(2, 0), (0, 1)]);
    }
}
