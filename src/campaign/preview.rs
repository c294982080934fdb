//! Read-only ad preview projection.
//!
//! Derives the strings a search-result style preview needs from the
//! campaign document. Nothing here mutates state.

use once_cell::sync::Lazy;
use regex::Regex;

use super::CampaignDocument;

/// Matches a leading `scheme://` or protocol-relative `//`.
static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\w+:)?//").expect("valid scheme regex"));

/// Format a website as an ad display URL.
///
/// Strips any scheme, drops everything from the first `/` on and lowercases
/// the host: `https://AcmeSolar.com/home` becomes `acmesolar.com`.
pub fn display_url(website: &str) -> String {
    let without_scheme = SCHEME_PREFIX.replace(website, "");
    without_scheme.split('/').next().unwrap_or_default().to_lowercase()
}

/// Strings rendered by the live ad preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdPreview {
    pub headline: String,
    /// Second headline shown after a `|`, taken from the next variation.
    pub headline_part2: Option<String>,
    pub description: String,
    pub display_url: String,
}

impl AdPreview {
    /// Project a preview for the selected headline and description.
    ///
    /// Returns `None` until ad creative exists. Indexes past the end clamp
    /// to the last variation.
    pub fn project(
        document: &CampaignDocument,
        headline_index: usize,
        description_index: usize,
    ) -> Option<Self> {
        let creative = document.ad_creative.as_ref()?;
        let headlines = &creative.headlines;

        let (headline, headline_part2) = if headlines.is_empty() {
            (String::new(), None)
        } else {
            let i = headline_index.min(headlines.len() - 1);
            let second = (headlines.len() > 1).then(|| headlines[(i + 1) % headlines.len()].clone());
            (headlines[i].clone(), second)
        };

        let description = creative
            .descriptions
            .get(description_index.min(creative.descriptions.len().saturating_sub(1)))
            .cloned()
            .unwrap_or_default();

        Some(Self {
            headline,
            headline_part2,
            description,
            display_url: display_url(&document.business_info.website),
        })
    }

    /// The full title line, e.g. `Solar Installs | Free Quote`.
    pub fn title(&self) -> String {
        match &self.headline_part2 {
            Some(second) => format!("{} | {}", self.headline, second),
            None => self.headline.clone(),
        }
    }
}

/// Running character counter for a generated line of copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthCounter {
    pub chars: usize,
    pub limit: usize,
}

impl LengthCounter {
    pub fn new(text: &str, limit: usize) -> Self {
        Self { chars: text.chars().count(), limit }
    }

    pub fn is_over_limit(&self) -> bool {
        self.chars > self.limit
    }

    /// Counter text, e.g. `24/30`.
    pub fn display(&self) -> String {
        format!("{}/{}", self.chars, self.limit)
    }
}
