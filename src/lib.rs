#![allow(clippy::format_push_string)]
#![allow(clippy::unused_self)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::cast_possible_truncation)]

//! # Adpilot
//!
//! AI campaign wizard for your terminal.
//!
//! Adpilot walks you through building a search advertising campaign in five
//! steps - business profile, strategy, keywords, ad copy and review - with
//! each content step generated by a hosted or local LLM.
//!
//! ## Features
//!
//! - **Guided Wizard**: A linear state machine that carries results forward
//! - **Structured Generation**: Every response is parsed against a strict schema
//! - **Live Ad Preview**: See headline and description combinations as a search ad
//! - **Providers**: Gemini (hosted) or Ollama (local)
//!
//! ## Quick Start
//!
//! ```bash
//! # Install
//! cargo install adpilot
//!
//! # Start the wizard
//! GEMINI_API_KEY=... adpilot
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::significant_drop_tightening)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::use_self)]

pub mod ai;
pub mod app;
pub mod campaign;
pub mod core;
pub mod tui;
pub mod wizard;

pub use ai::{GenerationClient, GenerationError, StructuredGenerator};
pub use app::App;
pub use campaign::{CampaignDocument, Keyword, MatchType};
pub use core::Config;
pub use wizard::{Step, WizardController, WizardError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "adpilot";
