//! Command-line configuration
//!
//! [`Cli`] holds the raw flags; [`Cli::resolve`] fills in defaults from the
//! terminal size and checks the values, producing a [`Config`].

use crate::board::MAX_AREA;
use crate::errors::LifeError;
use crate::seed::hash_seed;
use clap::Parser;
use rand::Rng;
use std::time::Duration;

/// Percentage of cells alive at start when no population flag is given
pub const DEFAULT_POPULATION_PERCENT: f64 = 20.0;

/// Tick interval in continuous mode when `--delay-ms` is not given
pub const DEFAULT_DELAY_MS: u64 = 100;

/// Rows reserved under the board for the status bar
pub const STATUS_BAR_HEIGHT: u16 = 1;

#[derive(Parser, Debug, Clone)]
#[command(name = "termlife")]
#[command(version)]
#[command(about = "Conway's Game of Life in the terminal")]
pub struct Cli {
    /// Board width in cells (defaults to the terminal width)
    #[arg(long)]
    pub width: Option<usize>,

    /// Board height in cells (defaults to the terminal height)
    #[arg(long)]
    pub height: Option<usize>,

    /// Initial number of live cells
    #[arg(short = 'n', long, conflicts_with = "population_percent")]
    pub population: Option<usize>,

    /// Initial live cells as a percentage of the board
    #[arg(short = 'p', long)]
    pub population_percent: Option<f64>,

    /// Seed string for a reproducible board
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Advance automatically instead of waiting for a key press
    #[arg(short, long)]
    pub continuous: bool,

    /// Milliseconds between generations in continuous mode
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Character drawn for live cells
    #[arg(long, default_value_t = 'X')]
    pub glyph: char,
}

/// How the driver advances from one generation to the next
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
    /// One generation per key press
    Manual,
    /// One generation per tick; key presses are polled, never waited on
    Continuous { interval: Duration },
}

/// Fully resolved settings for a run
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub population: usize,
    pub seed: u64,
    pub mode: StepMode,
    pub glyph: char,
}

impl Cli {
    /// Whether `resolve` will read the terminal size at all
    pub fn needs_terminal_size(&self) -> bool {
        self.width.is_none() || self.height.is_none()
    }

    /// Resolve flags against the terminal size (`columns`, `rows`).
    ///
    /// Without `--seed` a fresh random seed is drawn; it is kept in the
    /// returned config so the run can be reported and reproduced.
    pub fn resolve(&self, terminal_size: (u16, u16)) -> Result<Config, LifeError> {
        let (columns, rows) = terminal_size;
        let width = self.width.unwrap_or(columns as usize);
        let height = self
            .height
            .unwrap_or(rows.saturating_sub(STATUS_BAR_HEIGHT) as usize);
        if width == 0 || height == 0 {
            return Err(LifeError::InvalidDimensions { width, height });
        }

        let area = width
            .checked_mul(height)
            .filter(|&area| area <= MAX_AREA)
            .ok_or(LifeError::InvalidDimensions { width, height })?;
        let population = match (self.population, self.population_percent) {
            (Some(count), _) => count,
            (None, percent) => {
                population_from_percent(area, percent.unwrap_or(DEFAULT_POPULATION_PERCENT))?
            }
        };
        if population > area {
            return Err(LifeError::PopulationOutOfRange {
                requested: population,
                capacity: area,
            });
        }

        let seed = match &self.seed {
            Some(s) => hash_seed(s),
            None => rand::thread_rng().gen(),
        };

        let mode = if self.continuous {
            StepMode::Continuous {
                interval: Duration::from_millis(self.delay_ms),
            }
        } else {
            StepMode::Manual
        };

        Ok(Config {
            width,
            height,
            population,
            seed,
            mode,
            glyph: self.glyph,
        })
    }
}

/// Convert a percentage of `area` to a cell count, rounding down
pub fn population_from_percent(area: usize, percent: f64) -> Result<usize, LifeError> {
    if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
        return Err(LifeError::InvalidPercent { percent });
    }
    let count = (area as f64 * percent / 100.0).floor() as usize;
    Ok(count.min(area))
}
