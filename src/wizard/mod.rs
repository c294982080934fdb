//! Campaign wizard state machine.
//!
//! The wizard moves linearly through five steps. Each forward step except
//! the last runs exactly one generation call and merges its result into the
//! campaign document; a failed call leaves the document and step untouched
//! and surfaces a static, step-specific message.
//!
//! ```text
//! BusinessInfo --strategy--> Strategy --keywords--> Keywords --creative--> AdCreative --finalize--> Review
//! ```

mod controller;
mod error;
mod step;

pub use controller::WizardController;
pub use error::{user_message, WizardError};
pub use step::{Action, Step, StepStatus};
