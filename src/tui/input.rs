//! Input handling for the TUI.
//!
//! Processes keyboard events and updates application state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::wizard::Step;
use crate::App;

/// Handle keyboard events.
pub fn handle_events(key: KeyEvent, app: &mut App) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    // Nothing else is accepted while a generation call is in flight
    if app.is_loading() {
        return;
    }

    // The failure banner is modal: any key dismisses it
    if app.wizard.last_error().is_some() {
        app.dismiss_error();
        return;
    }

    match app.step() {
        Step::BusinessInfo => handle_business_info(key, app),
        Step::Strategy => handle_strategy(key, app),
        Step::Keywords => handle_keywords(key, app),
        Step::AdCreative => handle_creative(key, app),
        Step::Review => handle_review(key, app),
    }
}

/// Handle input on the business info form.
fn handle_business_info(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.request_advance(),

        // Field navigation
        KeyCode::Tab | KeyCode::Down => app.focus_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.focus_previous_field(),

        // Ctrl+U clears the field
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_field();
        }

        // Input editing
        KeyCode::Char(c) => app.enter_char(c),
        KeyCode::Backspace => app.delete_char(),

        _ => {}
    }
}

/// Handle input on the strategy view.
fn handle_strategy(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.request_advance(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Handle input on the keyword plan.
fn handle_keywords(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.request_advance(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_keywords_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_keywords_up(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Handle input on the ad creative view.
fn handle_creative(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.request_advance(),
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => app.go_back(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_creative_focus(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}

/// Handle input on the review screen.
fn handle_review(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('n' | 'N') => app.new_campaign(),
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
