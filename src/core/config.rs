//! Configuration management for Adpilot.
//!
//! Handles loading and saving configuration from TOML files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ai::GEMINI_DEFAULT_BASE_URL;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// UI/TUI settings
    pub ui: UiConfig,

    /// AI settings
    pub ai: AiConfig,
}

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log file used while the TUI owns the terminal
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// UI/TUI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Color theme name (built-in: default, nord, dracula)
    pub theme: String,

    /// Whether to show the live ad preview next to the creative lists
    pub show_preview: bool,
}

/// AI integration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiConfig {
    /// AI provider (gemini, ollama)
    pub provider: String,

    /// Model override for the selected provider
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Gemini-specific settings
    pub gemini: GeminiConfig,

    /// Ollama-specific settings
    pub ollama: OllamaConfig,
}

/// Gemini configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiConfig {
    /// Generative Language API base URL
    pub base_url: String,
}

/// Ollama configuration.
///
/// Unset keys fall back to `OLLAMA_HOST` / `OLLAMA_MODEL`, then to the
/// provider defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OllamaConfig {
    /// Ollama server URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Model to use
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.adpilot.toml` in current directory
    /// 2. `~/.config/adpilot/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        let local_config = PathBuf::from(".adpilot.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Some(global_config) = Self::global_config_path() {
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Save configuration to the global config file.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::global_config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to_file(&path)
    }

    /// Save configuration to a specific file.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Path of the global config file.
    pub fn global_config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("adpilot"))
    }

    /// Get the data directory path (for logs).
    pub fn data_dir() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("adpilot"))
    }

    /// Where TUI logs are written.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.general
            .log_file
            .clone()
            .or_else(|| Self::data_dir().map(|d| d.join("adpilot.log")))
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { theme: "default".to_string(), show_preview: true }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            provider: "gemini".to_string(),
            model: None,
            gemini: GeminiConfig::default(),
            ollama: OllamaConfig::default(),
        }
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self { base_url: GEMINI_DEFAULT_BASE_URL.to_string() }
    }
}
