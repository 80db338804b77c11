//! Terminal rendering and event loop for cds.
//!
//! Handles setup/teardown of raw mode, alternate screen, redraws,
//! and events (keypress, resize) to app logic.
//!
//! Everything is drawn on stderr so stdout stays free for the emitted command.

use crate::app::{AppState, KeypressResult};
use crate::core::error::SurfError;
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use thiserror::Error;

use std::io;

/// Errors that end the terminal session.
#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Surf(#[from] SurfError),
}

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit. The terminal is restored before returning, also on errors.
///
/// # Returns
/// The command to print for the shell, if the session ended with one.
pub fn run_terminal(app: &mut AppState) -> Result<Option<String>, TerminalError> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    let result = Terminal::new(CrosstermBackend::new(stderr))
        .map_err(TerminalError::from)
        .and_then(|mut terminal| {
            let size = terminal.size()?;
            app.handle_resize(size.width, size.height);
            event_loop(&mut terminal, app)
        });

    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen, Show)?;
    result
}

/// Main event loop of cds: draws UI, blocks on the next event and dispatches it to the app.
/// Returns on quit
fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> Result<Option<String>, TerminalError>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        terminal.draw(|f| ui::render(f, app)).map_err(io::Error::from)?;

        match event::read()? {
            // handle keypress
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                match app.handle_keypress(key) {
                    Ok(KeypressResult::Quit) => return Ok(None),
                    Ok(KeypressResult::QuitWithCommand(cmd)) => return Ok(Some(cmd)),
                    Ok(KeypressResult::Consumed | KeypressResult::Continue) => {}
                    Err(e) => {
                        log::error!("{}", e);
                        return Err(e.into());
                    }
                }
            }

            // handle resize
            Event::Resize(width, height) => app.handle_resize(width, height),

            _ => {}
        }
    }
}
