//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: driver state, the render/wait/step loop, input sources
//! - **[`panes`]**: the board widget and the status bar
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with the first
//! [`Board`] and a [`StepMode`], then call [`App::run`] with a terminal and an
//! [`EventSource`].
//!
//! [`Board`]: crate::board::Board
//! [`StepMode`]: crate::config::StepMode
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, CrosstermEvents, EventSource, RunState};
