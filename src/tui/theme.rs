//! Theme support for the TUI.
//!
//! A theme is a small palette: wizard chrome (progress bar, borders, form)
//! plus the colors used to mimic a search result in the ad preview.

use ratatui::style::Color;

/// A complete color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name for display and configuration
    pub name: String,
    /// Active step, focused field, primary buttons
    pub primary: Color,
    /// Completed steps and success messages
    pub success: Color,
    /// Main text color
    pub text: Color,
    /// Labels and secondary info
    pub text_dim: Color,
    /// Placeholders and pending steps
    pub text_muted: Color,
    /// Background color (Reset uses terminal default)
    pub background: Color,
    /// Selected item background
    pub selected_bg: Color,
    /// Border color
    pub border: Color,
    /// Over-limit counters
    pub warning: Color,
    /// Failure banner
    pub error: Color,
    /// Ad preview title
    pub ad_title: Color,
    /// Ad preview display URL
    pub ad_url: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    /// Default theme - works well on both light and dark terminals.
    pub fn default_theme() -> Self {
        Self {
            name: "default".to_string(),
            primary: Color::Rgb(37, 99, 235),      // Blue-600
            success: Color::Rgb(22, 163, 74),      // Green-600
            text: Color::White,
            text_dim: Color::Rgb(156, 163, 175),   // Gray-400
            text_muted: Color::Rgb(107, 114, 128), // Gray-500
            background: Color::Reset,
            selected_bg: Color::Rgb(30, 58, 138),  // Blue-900
            border: Color::Rgb(75, 85, 99),        // Gray-600
            warning: Color::Rgb(234, 179, 8),      // Yellow
            error: Color::Rgb(239, 68, 68),        // Red
            ad_title: Color::Rgb(138, 180, 248),   // Link blue
            ad_url: Color::Rgb(189, 193, 198),
        }
    }

    /// Nord theme - arctic, bluish colors.
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            primary: Color::Rgb(136, 192, 208),   // Nord8
            success: Color::Rgb(163, 190, 140),   // Nord14
            text: Color::Rgb(236, 239, 244),      // Nord6
            text_dim: Color::Rgb(216, 222, 233),  // Nord5
            text_muted: Color::Rgb(76, 86, 106),  // Nord3
            background: Color::Rgb(46, 52, 64),   // Nord0
            selected_bg: Color::Rgb(59, 66, 82),  // Nord1
            border: Color::Rgb(67, 76, 94),       // Nord2
            warning: Color::Rgb(235, 203, 139),   // Nord13
            error: Color::Rgb(191, 97, 106),      // Nord11
            ad_title: Color::Rgb(129, 161, 193),  // Nord9
            ad_url: Color::Rgb(143, 188, 187),    // Nord7
        }
    }

    /// Dracula theme - dark purple and pink.
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            primary: Color::Rgb(189, 147, 249),   // Purple
            success: Color::Rgb(80, 250, 123),    // Green
            text: Color::Rgb(248, 248, 242),      // Foreground
            text_dim: Color::Rgb(189, 147, 249),  // Purple (dimmed)
            text_muted: Color::Rgb(98, 114, 164), // Comment
            background: Color::Rgb(40, 42, 54),   // Background
            selected_bg: Color::Rgb(68, 71, 90),  // Current Line
            border: Color::Rgb(68, 71, 90),       // Selection
            warning: Color::Rgb(255, 184, 108),   // Orange
            error: Color::Rgb(255, 85, 85),       // Red
            ad_title: Color::Rgb(139, 233, 253),  // Cyan
            ad_url: Color::Rgb(80, 250, 123),     // Green
        }
    }

    /// Get a theme by name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "nord" => Some(Self::nord()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Names of all built-in themes.
    pub fn available_themes() -> Vec<&'static str> {
        vec!["default", "nord", "dracula"]
    }
}
