//! Core types and functionality for Adpilot.
//!
//! Currently this is the configuration layer shared by the CLI, the TUI
//! and the generation providers.

mod config;

pub use config::{AiConfig, Config, GeminiConfig, GeneralConfig, OllamaConfig, UiConfig};
