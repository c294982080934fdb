//! TUI application runner.
//!
//! Handles the main event loop and terminal setup/teardown.

use std::io::{self, stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::runtime::Runtime;

use super::{draw, handle_events};
use crate::wizard::Step;
use crate::App;

/// Run the TUI application.
///
/// This is the main entry point for the interactive wizard. Returns the app
/// so the caller can inspect the finished campaign.
pub fn run_tui(mut app: App) -> Result<App> {
    // Generation calls run on a single-threaded runtime, one at a time
    let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    setup_terminal()?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let result = run_main_loop(&mut terminal, &mut app, &runtime);

    restore_terminal()?;

    if app.step() == Step::Review {
        println!("{}", app.wizard.document().summary());
    }

    result.map(|()| app)
}

/// Setup the terminal for TUI mode.
fn setup_terminal() -> Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    // Setup panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    Ok(())
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Main event loop.
fn run_main_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    runtime: &Runtime,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);

    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_events(key, app);
                }
            }
        }

        if app.should_quit {
            break;
        }

        // Draw the loading view, then block on the generation call
        if app.pending.is_some() {
            terminal.draw(|frame| draw(frame, app))?;
            if let Some(action) = app.take_pending() {
                runtime.block_on(app.run_action(action));
            }

            // Keys typed while the call ran are stale; only Ctrl+C survives
            if discard_buffered_input(|| event::poll(Duration::ZERO), event::read)? {
                app.quit();
                break;
            }
        }
    }

    Ok(())
}

/// Drain queued terminal events without acting on them.
///
/// Returns whether Ctrl+C was among them.
fn discard_buffered_input(
    mut poll: impl FnMut() -> io::Result<bool>,
    mut read: impl FnMut() -> io::Result<Event>,
) -> io::Result<bool> {
    let mut quit = false;
    while poll()? {
        if let Event::Key(key) = read()? {
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                quit = true;
            }
        }
    }
    Ok(quit)
}
