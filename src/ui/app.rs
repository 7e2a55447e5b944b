//! Driver state and the render/wait/step loop

use crate::board::{self, Board};
use crate::config::{StepMode, STATUS_BAR_HEIGHT};
use crate::ui::panes::{render_status_bar, BoardWidget, StatusRenderData};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io;
use std::time::Duration;

/// Where the driver gets key presses from
pub trait EventSource {
    /// Wait for the next key press.
    ///
    /// With `timeout` of `None` this blocks until a key arrives. Otherwise it
    /// waits at most `timeout` and returns `Ok(None)` if nothing was pressed.
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>>;
}

/// Reads key presses from the real terminal
#[derive(Debug, Default)]
pub struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
        loop {
            if let Some(timeout) = timeout {
                if !event::poll(timeout)? {
                    return Ok(None);
                }
            }
            if let Event::Key(key) = event::read()? {
                // Releases and repeats would double-step on some platforms
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key));
                }
            }
            // Resize, mouse and focus events end a timed wait early but never
            // count as a step in manual mode
            if timeout.is_some() {
                return Ok(None);
            }
        }
    }
}

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Whether a key press ends the run
pub fn is_quit_key(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc => true,
        // Raw mode swallows SIGINT
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// The main application state
pub struct App {
    /// Current generation; replaced wholesale on every step
    board: Board,

    /// Number of steps taken since the initial board
    generation: u64,

    /// Seed the initial board was drawn from (shown in the status bar)
    seed: u64,

    mode: StepMode,
    state: RunState,
    glyph: char,
}

impl App {
    pub fn new(board: Board, mode: StepMode, seed: u64) -> Self {
        App {
            board,
            generation: 0,
            seed,
            mode,
            state: RunState::Running,
            glyph: crate::board::LIVE_CHAR,
        }
    }

    /// Draw live cells with `glyph` instead of the default
    pub fn with_glyph(mut self, glyph: char) -> Self {
        self.glyph = glyph;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run the TUI loop until the quit key is pressed
    pub fn run<B: Backend, E: EventSource>(
        &mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> io::Result<()> {
        let timeout = match self.mode {
            StepMode::Manual => None,
            StepMode::Continuous { interval } => Some(interval),
        };

        while self.state == RunState::Running {
            terminal.draw(|f| self.render(f))?;

            match events.next_key(timeout)? {
                Some(key) if is_quit_key(&key) => self.stop(),
                // Any other key in manual mode, or a key or an elapsed tick
                // in continuous mode
                _ => self.advance(),
            }
        }

        Ok(())
    }

    /// Replace the current board with its next generation
    pub fn advance(&mut self) {
        self.board = board::step(&self.board);
        self.generation += 1;
    }

    fn stop(&mut self) {
        self.state = RunState::Stopped;
        log::info!(
            "stopped at generation {} with population {}",
            self.generation,
            self.board.population()
        );
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame) {
        let (board_area, status_area) = split_screen(frame.area());

        frame.render_widget(BoardWidget::new(&self.board).glyph(self.glyph), board_area);

        render_status_bar(
            frame,
            status_area,
            &StatusRenderData {
                generation: self.generation,
                population: self.board.population(),
                area: self.board.area(),
                seed: self.seed,
                mode: self.mode,
            },
        );
    }
}

/// Board on top, status bar of `STATUS_BAR_HEIGHT` rows at the bottom
fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}
