//! Wizard error types.

use super::Step;
use crate::ai::GenerationError;

/// Why a wizard transition did not happen.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    /// A required input is missing; the transition is silently refused.
    #[error("transition skipped: {0}")]
    GuardSkipped(&'static str),

    /// A generation call is already running.
    #[error("a generation call is already in progress")]
    Busy,

    /// The generation call for a transition failed.
    #[error("{}", user_message(*target))]
    Generation {
        target: Step,
        #[source]
        source: GenerationError,
    },
}

impl WizardError {
    /// Message to surface to the user, if this error is user-visible.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::Generation { target, .. } => Some(user_message(*target)),
            Self::GuardSkipped(_) | Self::Busy => None,
        }
    }
}

/// Static failure message for the generation leading into `target`.
pub fn user_message(target: Step) -> &'static str {
    match target {
        Step::Strategy => "Failed to generate strategy. Please check your API key.",
        Step::Keywords => "Failed to generate keywords.",
        Step::AdCreative => "Failed to generate creatives.",
        Step::BusinessInfo | Step::Review => "Something went wrong.",
    }
}
