//! Terminal User Interface module.
//!
//! This module handles the wizard's rendering and input handling using
//! ratatui. It only reads the wizard state and turns key presses into
//! wizard actions.

mod app;
mod input;
mod theme;
mod ui;

pub use app::run_tui;
pub use input::handle_events;
pub use theme::Theme;
pub use ui::draw;
