//! Campaign data model.
//!
//! The campaign document is the single unit of state a wizard session
//! builds up: business profile, strategy, keyword plan and ad creative.

mod model;
mod preview;

pub use model::{
    AdCreative, BusinessField, BusinessInfo, CampaignDocument, CampaignStrategy, Keyword,
    MatchType, DESCRIPTION_MAX_CHARS, DESCRIPTION_TARGET_COUNT, HEADLINE_MAX_CHARS,
    HEADLINE_TARGET_COUNT,
};
pub use preview::{display_url, AdPreview, LengthCounter};
