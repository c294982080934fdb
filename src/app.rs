//! Application state and lifecycle management.
//!
//! This module contains the `App` struct that pairs the wizard controller
//! with the view-local state the TUI needs (focused field, selected ad
//! variations, status line).

use crate::campaign::{AdPreview, BusinessField};
use crate::core::Config;
use crate::tui::Theme;
use crate::wizard::{Action, Step, WizardController, WizardError};

/// Which creative list has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CreativeFocus {
    #[default]
    Headlines,
    Descriptions,
}

/// Main application state.
///
/// Everything that belongs to the campaign lives in the controller; the
/// rest is presentation state that never reaches the campaign document.
#[derive(Debug)]
pub struct App {
    /// The wizard session
    pub wizard: WizardController,

    /// Application configuration
    pub config: Config,

    /// Current UI theme
    pub theme: Theme,

    /// Business info field being edited
    pub focused_field: BusinessField,

    /// Selected headline variation (ad creative step)
    pub selected_headline: usize,

    /// Selected description variation (ad creative step)
    pub selected_description: usize,

    /// Which creative list the arrow keys move through
    pub creative_focus: CreativeFocus,

    /// Scroll offset for the keyword table
    pub keyword_scroll: usize,

    /// Status message to display (if any)
    pub status_message: Option<String>,

    /// Generation action waiting for the event loop to run it
    pub pending: Option<Action>,

    /// Whether the application should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new application instance.
    pub fn new(wizard: WizardController, config: Config) -> Self {
        let theme = Theme::by_name(&config.ui.theme).unwrap_or_default();

        Self {
            wizard,
            config,
            theme,
            focused_field: BusinessField::Name,
            selected_headline: 0,
            selected_description: 0,
            creative_focus: CreativeFocus::default(),
            keyword_scroll: 0,
            status_message: None,
            pending: None,
            should_quit: false,
        }
    }

    /// Current wizard step.
    pub fn step(&self) -> Step {
        self.wizard.current_step()
    }

    /// Whether a generation call is queued or running.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some() || self.wizard.is_busy()
    }

    /// Type a character into the focused field.
    pub fn enter_char(&mut self, c: char) {
        let mut value = self.focused_value().to_string();
        value.push(c);
        self.wizard.update_field(self.focused_field, value);
    }

    /// Delete the last character of the focused field.
    pub fn delete_char(&mut self) {
        let mut value = self.focused_value().to_string();
        if value.pop().is_some() {
            self.wizard.update_field(self.focused_field, value);
        }
    }

    /// Clear the focused field.
    pub fn clear_field(&mut self) {
        self.wizard.update_field(self.focused_field, String::new());
    }

    pub fn focus_next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn focus_previous_field(&mut self) {
        self.focused_field = self.focused_field.previous();
    }

    /// Value of the focused field.
    pub fn focused_value(&self) -> &str {
        self.wizard.document().business_info.get(self.focused_field)
    }

    /// Ask to move forward from the current step.
    ///
    /// Generation steps are queued for the event loop so a loading frame can
    /// be drawn first; finalizing happens immediately.
    pub fn request_advance(&mut self) {
        if self.is_loading() {
            return;
        }

        match Action::forward_from(self.step()) {
            Some(action) if !action.generates() => {
                self.wizard.finalize();
                self.set_status("Campaign ready to launch");
            }
            Some(action) if self.wizard.can_advance() => {
                self.pending = Some(action);
            }
            Some(_) => {
                self.set_status("Business name and description are required");
            }
            None => {}
        }
    }

    /// Take the queued generation action, if any.
    pub fn take_pending(&mut self) -> Option<Action> {
        self.pending.take()
    }

    /// Run a wizard action to completion.
    pub async fn run_action(&mut self, action: Action) {
        match self.wizard.dispatch(action).await {
            Ok(step) => {
                if step == Step::AdCreative && action == Action::AdvanceToCreative {
                    self.reset_selection();
                }
                if step == Step::Keywords {
                    self.keyword_scroll = 0;
                }
                self.status_message = None;
            }
            Err(WizardError::GuardSkipped(reason)) => {
                tracing::debug!(reason, "Advance skipped");
            }
            Err(e) => {
                // The controller keeps the user-facing message
                tracing::debug!(error = %e, "Advance failed");
            }
        }
    }

    /// Go back one step.
    pub fn go_back(&mut self) {
        if !self.is_loading() {
            self.wizard.back();
        }
    }

    /// Throw away the campaign and start a new one.
    pub fn new_campaign(&mut self) {
        self.wizard.reset();
        self.focused_field = BusinessField::Name;
        self.keyword_scroll = 0;
        self.reset_selection();
        self.set_status("Started a new campaign");
    }

    /// Dismiss the failure message.
    pub fn dismiss_error(&mut self) {
        self.wizard.dismiss_error();
    }

    /// Switch between the headline and description lists.
    pub fn toggle_creative_focus(&mut self) {
        self.creative_focus = match self.creative_focus {
            CreativeFocus::Headlines => CreativeFocus::Descriptions,
            CreativeFocus::Descriptions => CreativeFocus::Headlines,
        };
    }

    /// Move the selection down in the focused creative list.
    pub fn select_next(&mut self) {
        let Some(creative) = self.wizard.document().ad_creative.as_ref() else {
            return;
        };
        match self.creative_focus {
            CreativeFocus::Headlines => {
                if self.selected_headline + 1 < creative.headlines.len() {
                    self.selected_headline += 1;
                }
            }
            CreativeFocus::Descriptions => {
                if self.selected_description + 1 < creative.descriptions.len() {
                    self.selected_description += 1;
                }
            }
        }
    }

    /// Move the selection up in the focused creative list.
    pub fn select_previous(&mut self) {
        match self.creative_focus {
            CreativeFocus::Headlines => {
                self.selected_headline = self.selected_headline.saturating_sub(1);
            }
            CreativeFocus::Descriptions => {
                self.selected_description = self.selected_description.saturating_sub(1);
            }
        }
    }

    pub fn scroll_keywords_down(&mut self) {
        if self.keyword_scroll + 1 < self.wizard.document().keywords.len() {
            self.keyword_scroll += 1;
        }
    }

    pub fn scroll_keywords_up(&mut self) {
        self.keyword_scroll = self.keyword_scroll.saturating_sub(1);
    }

    /// Live preview for the current selection.
    pub fn preview(&self) -> Option<AdPreview> {
        AdPreview::project(self.wizard.document(), self.selected_headline, self.selected_description)
    }

    /// Set a status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn reset_selection(&mut self) {
        self.selected_headline = 0;
        self.selected_description = 0;
        self.creative_focus = CreativeFocus::Headlines;
    }
}
