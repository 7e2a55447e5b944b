//! TUI pane rendering
//!
//! - [`board`]: one glyph per cell, no borders, so cells map 1:1 to columns and rows
//! - [`status`]: status bar with generation, population, seed and keybindings

pub mod board;
pub mod status;

pub use board::BoardWidget;
pub use status::{render_status_bar, StatusRenderData};
