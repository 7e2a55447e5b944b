// Integration tests for the driver loop against a scripted input source

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use std::collections::VecDeque;
use std::io;
use std::time::Duration;
use termlife::board::Board;
use termlife::config::StepMode;
use termlife::ui::{App, EventSource, RunState};

/// Replays a fixed list of inputs, then presses Esc forever
struct ScriptedEvents {
    script: VecDeque<Option<KeyEvent>>,
    timeouts: Vec<Option<Duration>>,
}

impl ScriptedEvents {
    fn new(script: Vec<Option<KeyEvent>>) -> Self {
        ScriptedEvents {
            script: script.into(),
            timeouts: Vec::new(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_key(&mut self, timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
        self.timeouts.push(timeout);
        Ok(self
            .script
            .pop_front()
            .unwrap_or(Some(key(KeyCode::Esc))))
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn blinker() -> Board {
    Board::from_rows(&[
        ".....", //
        ".....", //
        ".XXX.", //
        ".....", //
        ".....",
    ])
    .unwrap()
}

fn board_rows(buf: &Buffer, rows: usize, cols: usize) -> Vec<String> {
    let width = buf.area.width as usize;
    buf.content
        .chunks(width)
        .take(rows)
        .map(|row| row.iter().take(cols).map(|cell| cell.symbol()).collect())
        .collect()
}

#[test]
fn test_manual_mode_steps_once_per_key() {
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let mut events = ScriptedEvents::new(vec![
        Some(key(KeyCode::Char(' '))),
        Some(key(KeyCode::Char('a'))),
        Some(key(KeyCode::Enter)),
        Some(key(KeyCode::Esc)),
    ]);

    let mut app = App::new(blinker(), StepMode::Manual, 7);
    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(app.state(), RunState::Stopped);
    assert_eq!(app.generation(), 3);
    // Odd generation of a blinker is the vertical phase
    assert_eq!(app.board(), &termlife::board::step(&blinker()));
    assert!(events.timeouts.iter().all(|t| t.is_none()));
}

#[test]
fn test_escape_before_any_step() {
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let mut events = ScriptedEvents::new(vec![Some(key(KeyCode::Esc))]);

    let mut app = App::new(blinker(), StepMode::Manual, 0);
    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(app.generation(), 0);
    assert_eq!(app.board(), &blinker());
}

#[test]
fn test_ctrl_c_quits() {
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    let mut events = ScriptedEvents::new(vec![Some(key(KeyCode::Char('c'))), Some(ctrl_c)]);

    let mut app = App::new(blinker(), StepMode::Manual, 0);
    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(app.generation(), 1);
    assert_eq!(app.state(), RunState::Stopped);
}

#[test]
fn test_continuous_mode_advances_on_timeout() {
    let interval = Duration::from_millis(25);
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let mut events = ScriptedEvents::new(vec![None, None, None, None]);

    let mut app = App::new(blinker(), StepMode::Continuous { interval }, 0);
    app.run(&mut terminal, &mut events).unwrap();

    assert_eq!(app.generation(), 4);
    assert_eq!(app.board(), &blinker());
    assert!(events.timeouts.iter().all(|t| *t == Some(interval)));
}

#[test]
fn test_screen_shows_last_generation() {
    let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
    let mut events = ScriptedEvents::new(vec![Some(key(KeyCode::Char('n')))]);

    let mut app = App::new(blinker(), StepMode::Manual, 0).with_glyph('@');
    app.run(&mut terminal, &mut events).unwrap();

    let rows = board_rows(terminal.backend().buffer(), 5, 5);
    assert_eq!(rows, vec!["     ", "  @  ", "  @  ", "  @  ", "     "]);
}

#[test]
fn test_status_bar_shows_generation() {
    let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
    let mut events = ScriptedEvents::new(vec![
        Some(key(KeyCode::Char('n'))),
        Some(key(KeyCode::Char('n'))),
    ]);

    let mut app = App::new(blinker(), StepMode::Manual, 0);
    app.run(&mut terminal, &mut events).unwrap();

    let buf = terminal.backend().buffer();
    let status: String = buf.content[5 * 60..]
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(status.contains("Gen 2"), "status bar was {:?}", status);
    assert!(status.contains("Pop 3"), "status bar was {:?}", status);
}
