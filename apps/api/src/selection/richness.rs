use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::extract::{has_any_field, DESCRIPTION_KEYS, IMAGE_KEYS, LINK_KEYS};
use crate::models::cv::{CvData, SectionKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RichnessTier {
    Premium,
    Standard,
    Compact,
}

impl RichnessTier {
    /// Ordering nudge applied on top of a section's base priority.
    pub fn priority_bonus(&self) -> i32 {
        match self {
            RichnessTier::Premium => 5,
            RichnessTier::Standard => 0,
            RichnessTier::Compact => -5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRichness {
    pub section: SectionKind,
    pub item_count: usize,
    pub score: f64,
    pub tier: RichnessTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioRichness {
    pub total_score: f64,
    pub tier: RichnessTier,
    pub sections: Vec<SectionRichness>,
}

impl PortfolioRichness {
    /// Tier of one section; sections that were never scored count as compact.
    pub fn tier_for(&self, section: SectionKind) -> RichnessTier {
        self.sections
            .iter()
            .find(|s| s.section == section)
            .map(|s| s.tier)
            .unwrap_or(RichnessTier::Compact)
    }
}

const SECTION_PREMIUM: f64 = 20.0;
const SECTION_STANDARD: f64 = 8.0;
const PORTFOLIO_PREMIUM: f64 = 80.0;
const PORTFOLIO_STANDARD: f64 = 30.0;

/// Per-item weight: how much one entry in this section adds to the page.
fn section_weight(section: SectionKind) -> f64 {
    match section {
        SectionKind::Projects => 4.0,
        SectionKind::Experience | SectionKind::Testimonials => 3.0,
        SectionKind::Publications => 2.5,
        SectionKind::Education | SectionKind::Achievements | SectionKind::Awards => 2.0,
        SectionKind::Certifications | SectionKind::Volunteer | SectionKind::Highlights => 1.5,
        SectionKind::Skills | SectionKind::Hero | SectionKind::About | SectionKind::Contact => 1.0,
        SectionKind::Languages | SectionKind::Interests => 0.5,
    }
}

/// `item_count × weight + 2 × described_items + linked_items`.
pub fn score_section(section: SectionKind, items: &[Value]) -> SectionRichness {
    let described = items
        .iter()
        .filter(|item| has_any_field(item, DESCRIPTION_KEYS))
        .count();
    let linked = items
        .iter()
        .filter(|item| has_any_field(item, LINK_KEYS) || has_any_field(item, IMAGE_KEYS))
        .count();

    let score = items.len() as f64 * section_weight(section) + 2.0 * described as f64 + linked as f64;
    let tier = bucket(score, SECTION_PREMIUM, SECTION_STANDARD);

    SectionRichness {
        section,
        item_count: items.len(),
        score,
        tier,
    }
}

pub fn score_portfolio(cv: &CvData) -> PortfolioRichness {
    let sections: Vec<SectionRichness> = cv
        .present_sections()
        .into_iter()
        .filter_map(|kind| cv.section_items(kind).map(|items| score_section(kind, &items)))
        .collect();

    let total_score: f64 = sections.iter().map(|s| s.score).sum();

    PortfolioRichness {
        total_score,
        tier: bucket(total_score, PORTFOLIO_PREMIUM, PORTFOLIO_STANDARD),
        sections,
    }
}

fn bucket(score: f64, premium: f64, standard: f64) -> RichnessTier {
    match score {
        s if s >= premium => RichnessTier::Premium,
        s if s >= standard => RichnessTier::Standard,
        _ => RichnessTier::Compact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_section_score_is_linear() {
        let items = vec![
            json!({ "name": "A", "description": "does things", "url": "https://a.dev" }),
            json!({ "name": "B" }),
            json!("C"),
        ];
        let r = score_section(SectionKind::Projects, &items);
        // 3 × 4.0 + 2 × 1 + 1
        assert!((r.score - 15.0).abs() < f64::EPSILON);
        assert_eq!(r.tier, RichnessTier::Standard);
        assert_eq!(r.item_count, 3);
    }

    #[test]
    fn test_section_tiers() {
        let many: Vec<_> = (0..6).map(|i| json!({ "name": i })).collect();
        assert_eq!(score_section(SectionKind::Projects, &many).tier, RichnessTier::Premium);
        assert_eq!(score_section(SectionKind::Languages, &many).tier, RichnessTier::Compact);
    }

    #[test]
    fn test_portfolio_sums_present_sections() {
        let cv: CvData = serde_json::from_value(json!({
            "hero": { "name": "Ada" },
            "projects": [{ "name": "A" }, { "name": "B" }],
            "interests": ["Chess"]
        }))
        .unwrap();
        let richness = score_portfolio(&cv);
        // hero 1.0 + projects 8.0 + interests 0.5
        assert!((richness.total_score - 9.5).abs() < f64::EPSILON);
        assert_eq!(richness.tier, RichnessTier::Compact);
        assert_eq!(richness.sections.len(), 3);
        assert_eq!(richness.tier_for(SectionKind::Projects), RichnessTier::Standard);
        assert_eq!(richness.tier_for(SectionKind::Experience), RichnessTier::Compact);
    }

    #[test]
    fn test_empty_cv_scores_zero() {
        let richness = score_portfolio(&CvData::default());
        assert_eq!(richness.total_score, 0.0);
        assert_eq!(richness.tier, RichnessTier::Compact);
    }

    #[test]
    fn test_priority_bonus() {
        assert!(RichnessTier::Premium.priority_bonus() > RichnessTier::Standard.priority_bonus());
        assert!(RichnessTier::Compact.priority_bonus() < 0);
    }
}
