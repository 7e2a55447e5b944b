// termlife: Conway's Game of Life in the terminal

use std::io::{self, Stdout};

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::{Terminal, backend::CrosstermBackend};

use termlife::board;
use termlife::config::Cli;
use termlife::errors::LifeError;
use termlife::ui::{App, CrosstermEvents};

fn main() {
    // Logs go to stderr; redirect it (2>life.log) to read them while the TUI runs
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), LifeError> {
    let terminal_size = if cli.needs_terminal_size() {
        crossterm::terminal::size()?
    } else {
        (0, 0)
    };
    let config = cli.resolve(terminal_size)?;
    log::info!(
        "board {}x{}, population {}, seed {:#x}, mode {:?}",
        config.width,
        config.height,
        config.population,
        config.seed,
        config.mode
    );

    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let board = board::seed(config.width, config.height, config.population, &mut rng)?;

    let mut terminal = setup_terminal()?;

    let mut app = App::new(board, config.mode, config.seed).with_glyph(config.glyph);
    let res = app.run(&mut terminal, &mut CrosstermEvents);

    // Restore terminal even if the loop failed
    let restored = restore_terminal(&mut terminal);
    first_error(res.map_err(LifeError::Terminal), restored)
}

/// Combine the loop result with the terminal restore result.
///
/// A loop failure wins; a restore failure behind it is logged, not dropped.
fn first_error(run: Result<(), LifeError>, restore: Result<(), LifeError>) -> Result<(), LifeError> {
    match (run, restore) {
        (Err(e), Err(restore_err)) => {
            log::error!("failed to restore terminal: {}", restore_err);
            Err(e)
        }
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Ok(()), Ok(())) => Ok(()),
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, LifeError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err.into());
    }
    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(err) => {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            Err(err.into())
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<(), LifeError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terminal_err(msg: &str) -> LifeError {
        LifeError::Terminal(io::Error::new(io::ErrorKind::Other, msg.to_string()))
    }

    #[test]
    fn test_loop_error_reported_before_restore_error() {
        let err = first_error(Err(terminal_err("draw failed")), Err(terminal_err("restore failed")))
            .unwrap_err();
        assert!(err.to_string().contains("draw failed"));
    }

    #[test]
    fn test_restore_error_reported_alone() {
        let err = first_error(Ok(()), Err(terminal_err("restore failed"))).unwrap_err();
        assert!(err.to_string().contains("restore failed"));
        assert!(first_error(Ok(()), Ok(())).is_ok());
    }
}
