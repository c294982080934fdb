//! Prompt builders for each generation step.

use crate::campaign::{
    BusinessInfo, CampaignStrategy, Keyword, DESCRIPTION_MAX_CHARS, DESCRIPTION_TARGET_COUNT,
    HEADLINE_MAX_CHARS, HEADLINE_TARGET_COUNT,
};

/// Number of keywords embedded in the ad copy prompt.
const CREATIVE_KEYWORD_LIMIT: usize = 10;

/// Build the campaign strategy prompt.
pub fn strategy_prompt(info: &BusinessInfo) -> String {
    format!(
        r"Act as a senior Google Ads specialist. Based on the following business, develop a high-level campaign strategy.

Business Name: {}
Website: {}
Description: {}
Target Audience: {}
Monthly Budget: {}

Determine the best Campaign Goal (e.g., Sales, Leads, Traffic), Bidding Strategy (e.g., Maximize Conversions, Target CPA), which Networks to target (Search, Display, etc.), and suggested Locations. Provide a short rationale.",
        info.name, info.website, info.description, info.audience, info.budget
    )
}

/// Build the keyword research prompt.
pub fn keywords_prompt(info: &BusinessInfo, strategy: &CampaignStrategy) -> String {
    format!(
        r"Generate a list of high-intent Google Ads keywords for this business.
Business: {}
Audience: {}
Goal: {}

Provide 10-15 keywords with mixed match types (Broad, Phrase, Exact) that are most likely to drive high-quality traffic.",
        info.description, info.audience, strategy.goal
    )
}

/// Build the ad copy prompt.
pub fn ad_creative_prompt(info: &BusinessInfo, keywords: &[Keyword]) -> String {
    let keyword_list = keywords
        .iter()
        .take(CREATIVE_KEYWORD_LIMIT)
        .map(|k| k.text.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r"Write excellent Google Search Ad copy for the following business.
Business: {} - {}
Target Keywords: {}

Strict Google Ads Constraints:
- Headlines: Max {} characters each. Generate {} variations.
- Descriptions: Max {} characters each. Generate {} variations.

Make them punchy, action-oriented, and include the keyword where possible.",
        info.name,
        info.description,
        keyword_list,
        HEADLINE_MAX_CHARS,
        HEADLINE_TARGET_COUNT,
        DESCRIPTION_MAX_CHARS,
        DESCRIPTION_TARGET_COUNT
    )
}
