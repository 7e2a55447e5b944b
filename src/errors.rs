//! Error types for termlife
//!
//! [`LifeError`] covers every failure the crate reports: rejected board
//! parameters, rejected command-line values, and a failing terminal.
//!
//! Stepping a board never fails; only construction and the display surface do.

use std::fmt;
use std::io;

/// Errors raised while building a board or driving the terminal
#[derive(Debug)]
pub enum LifeError {
    /// Width or height was zero
    InvalidDimensions { width: usize, height: usize },

    /// More live cells were requested than the board can hold
    PopulationOutOfRange { requested: usize, capacity: usize },

    /// Population percentage was not a finite number in 0..=100
    InvalidPercent { percent: f64 },

    /// A cell coordinate fell outside the board
    CellOutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    /// Text rows of a board literal had different lengths
    RaggedRows { row: usize, expected: usize, found: usize },

    /// The terminal could not be queried, acquired, drawn to or read from
    Terminal(io::Error),
}

impl fmt::Display for LifeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifeError::InvalidDimensions { width, height } => {
                write!(
                    f,
                    "Invalid board size {}x{}: width and height must be positive",
                    width, height
                )
            }
            LifeError::PopulationOutOfRange {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "Population {} does not fit on a board of {} cells",
                    requested, capacity
                )
            }
            LifeError::InvalidPercent { percent } => {
                write!(
                    f,
                    "Population percent {} must be between 0 and 100",
                    percent
                )
            }
            LifeError::CellOutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Cell ({}, {}) is outside the {}x{} board",
                    x, y, width, height
                )
            }
            LifeError::RaggedRows {
                row,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row {} has {} cells, expected {}",
                    row, found, expected
                )
            }
            LifeError::Terminal(err) => write!(f, "Terminal error: {}", err),
        }
    }
}

impl std::error::Error for LifeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LifeError::Terminal(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for LifeError {
    fn from(err: io::Error) -> Self {
        LifeError::Terminal(err)
    }
}
