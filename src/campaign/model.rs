//! Campaign document types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Maximum headline length requested from the generator.
pub const HEADLINE_MAX_CHARS: usize = 30;

/// Number of headline variations requested from the generator.
pub const HEADLINE_TARGET_COUNT: usize = 5;

/// Maximum description length requested from the generator.
pub const DESCRIPTION_MAX_CHARS: usize = 90;

/// Number of description variations requested from the generator.
pub const DESCRIPTION_TARGET_COUNT: usize = 3;

/// The business profile entered on the first wizard step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInfo {
    pub name: String,
    pub website: String,
    pub description: String,
    pub audience: String,
    pub budget: String,
}

impl BusinessInfo {
    /// Get the value of a single field.
    pub fn get(&self, field: BusinessField) -> &str {
        match field {
            BusinessField::Name => &self.name,
            BusinessField::Website => &self.website,
            BusinessField::Description => &self.description,
            BusinessField::Audience => &self.audience,
            BusinessField::Budget => &self.budget,
        }
    }

    /// Get a mutable handle to a single field.
    pub fn get_mut(&mut self, field: BusinessField) -> &mut String {
        match field {
            BusinessField::Name => &mut self.name,
            BusinessField::Website => &mut self.website,
            BusinessField::Description => &mut self.description,
            BusinessField::Audience => &mut self.audience,
            BusinessField::Budget => &mut self.budget,
        }
    }

    /// Replace a single field.
    pub fn set(&mut self, field: BusinessField, value: impl Into<String>) {
        *self.get_mut(field) = value.into();
    }

    /// Whether the fields required to generate a strategy are filled in.
    pub fn is_ready_for_strategy(&self) -> bool {
        !self.name.is_empty() && !self.description.is_empty()
    }
}

/// Addressable fields of [`BusinessInfo`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessField {
    Name,
    Website,
    Description,
    Audience,
    Budget,
}

impl BusinessField {
    /// All fields in the order the form presents them.
    pub const ALL: [Self; 5] =
        [Self::Name, Self::Website, Self::Description, Self::Audience, Self::Budget];

    /// Form label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Business Name",
            Self::Website => "Website URL",
            Self::Description => "What do you sell/offer?",
            Self::Audience => "Target Audience",
            Self::Budget => "Monthly Budget (Approx)",
        }
    }

    /// Placeholder hint shown while the field is empty.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "e.g. Acme Solar Solutions",
            Self::Website => "e.g. www.acmesolar.com",
            Self::Description => "Describe your products or services in detail...",
            Self::Audience => "e.g. Homeowners in California",
            Self::Budget => "e.g. $2000",
        }
    }

    /// Whether the strategy step refuses to run while this field is empty.
    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Description)
    }

    /// The next field, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous field, wrapping around.
    pub fn previous(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// High-level campaign strategy proposed by the generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignStrategy {
    pub goal: String,
    pub bidding_strategy: String,
    pub networks: Vec<String>,
    pub locations: Vec<String>,
    pub rationale: String,
}

/// Keyword matching strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchType {
    Broad,
    Phrase,
    Exact,
}

impl MatchType {
    /// Wire tokens accepted by the keyword schema.
    pub const TOKENS: [&'static str; 3] = ["Broad", "Phrase", "Exact"];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Broad => "Broad",
            Self::Phrase => "Phrase",
            Self::Exact => "Exact",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single keyword in the keyword plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Keyword {
    pub text: String,
    pub match_type: MatchType,
    pub intent: String,
}

/// Generated ad copy.
///
/// Length limits are requested from the generator only; the lists are kept
/// exactly as returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdCreative {
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
}

/// Everything a wizard session has produced so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDocument {
    pub business_info: BusinessInfo,
    pub strategy: Option<CampaignStrategy>,
    pub keywords: Vec<Keyword>,
    pub ad_creative: Option<AdCreative>,
}

impl CampaignDocument {
    /// A fresh, empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain-text summary of the finished campaign.
    pub fn summary(&self) -> String {
        let info = &self.business_info;
        let goal = self.strategy.as_ref().map_or("-", |s| s.goal.as_str());

        let mut out = String::new();
        out.push_str(&format!("Business: {}\n", info.name));
        out.push_str(&format!("Goal:     {}\n", goal));
        out.push_str(&format!("Keywords: {} keywords selected\n", self.keywords.len()));
        out.push_str(&format!("Budget:   {} / month\n", info.budget));

        if let Some(strategy) = &self.strategy {
            out.push_str(&format!("\nBidding:   {}\n", strategy.bidding_strategy));
            out.push_str(&format!("Networks:  {}\n", strategy.networks.join(", ")));
            out.push_str(&format!("Locations: {}\n", strategy.locations.join(", ")));
        }

        if !self.keywords.is_empty() {
            out.push_str("\nKeyword plan:\n");
            for kw in &self.keywords {
                out.push_str(&format!("  [{}] {} ({})\n", kw.match_type, kw.text, kw.intent));
            }
        }

        if let Some(creative) = &self.ad_creative {
            out.push_str("\nHeadlines:\n");
            for h in &creative.headlines {
                out.push_str(&format!("  - {}\n", h));
            }
            out.push_str("\nDescriptions:\n");
            for d in &creative.descriptions {
                out.push_str(&format!("  - {}\n", d));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_field_roundtrip() {
        let mut info = BusinessInfo::default();
        for field in BusinessField::ALL {
            info.set(field, field.label());
        }
        assert_eq!(info.get(BusinessField::Name), "Business Name");
        assert_eq!(info.budget, "Monthly Budget (Approx)");
    }

    #[test]
    fn test_ready_for_strategy_requires_name_and_description() {
        let mut info = BusinessInfo::default();
        assert!(!info.is_ready_for_strategy());

        info.name = "Acme".to_string();
        assert!(!info.is_ready_for_strategy());

        info.description = "solar".to_string();
        assert!(info.is_ready_for_strategy());

        // Whitespace counts as filled in
        info.name = " ".to_string();
        assert!(info.is_ready_for_strategy());
    }

    #[test]
    fn test_field_navigation_wraps() {
        assert_eq!(BusinessField::Name.next(), BusinessField::Website);
        assert_eq!(BusinessField::Budget.next(), BusinessField::Name);
        assert_eq!(BusinessField::Name.previous(), BusinessField::Budget);
        assert!(BusinessField::Description.is_required());
        assert!(!BusinessField::Audience.is_required());
    }

    #[test]
    fn test_strategy_uses_camel_case_keys() {
        let json = r#"{
            "goal": "Leads",
            "biddingStrategy": "Target CPA",
            "networks": ["Search"],
            "locations": ["California"],
            "rationale": "High intent"
        }"#;
        let strategy: CampaignStrategy = serde_json::from_str(json).unwrap();
        assert_eq!(strategy.bidding_strategy, "Target CPA");
    }

    #[test]
    fn test_keyword_rejects_unknown_match_type() {
        let json = r#"{"text": "solar", "matchType": "Fuzzy", "intent": "Transactional"}"#;
        assert!(serde_json::from_str::<Keyword>(json).is_err());

        let json = r#"{"text": "solar", "matchType": "Exact", "intent": "Transactional"}"#;
        let kw: Keyword = serde_json::from_str(json).unwrap();
        assert_eq!(kw.match_type, MatchType::Exact);
        assert_eq!(kw.match_type.to_string(), "Exact");
    }

    #[test]
    fn test_summary_mentions_budget_and_keyword_count() {
        let mut doc = CampaignDocument::new();
        doc.business_info.name = "Acme Solar".to_string();
        doc.business_info.budget = "$2000".to_string();
        doc.keywords.push(Keyword {
            text: "solar panels".to_string(),
            match_type: MatchType::Phrase,
            intent: "Transactional".to_string(),
        });

        let summary = doc.summary();
        assert!(summary.contains("Acme Solar"));
        assert!(summary.contains("$2000 / month"));
        assert!(summary.contains("1 keywords selected"));
        assert!(summary.contains("[Phrase] solar panels"));
    }
}
