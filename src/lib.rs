//! # Introduction
//!
//! termlife runs Conway's Game of Life in a terminal. A board of alive and
//! dead cells is drawn one character per cell with
//! [ratatui](https://docs.rs/ratatui) and advanced one generation per key
//! press, or continuously on a fixed tick.
//!
//! ## Pipeline
//!
//! ```text
//! CLI flags → Config → seed(rng) → Board → step → Board → ... → TUI
//! ```
//!
//! 1. [`config`]: parses flags and fills in defaults from the terminal size.
//! 2. [`seed`]: turns a seed string into the numeric seed for the generator.
//! 3. [`board`]: the immutable [`board::Board`] value, random seeding, and the
//!    B3/S23 [`board::step`] transition.
//! 4. [`ui`]: the driver loop and panes; not part of the stable library API.
//! 5. [`errors`]: the crate error type.
//!
//! ## Rules
//!
//! A live cell survives with 2 or 3 live neighbors, a dead cell is born with
//! exactly 3. The grid has hard edges: cells past the border are dead.

pub mod board;
pub mod config;
pub mod errors;
pub mod seed;
pub mod ui;
