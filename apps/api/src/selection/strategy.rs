//! Selector strategies: pluggable, trait-based ranking of candidate components.
//!
//! A strategy only says which components it *prefers* for a section; registry
//! constraints, duplicate avoidance and fallbacks are applied by `UnifiedSelector`.
//! `AppState` holds the chosen strategy as `Arc<dyn ComponentSelector>`.

use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::models::cv::SectionKind;
use crate::registry::ComponentType;
use crate::selection::archetype::Archetype;
use crate::selection::layout::LayoutHint;
use crate::selection::richness::RichnessTier;
use crate::selection::rules::RuleSelector;
use crate::selection::smart::SmartSelector;

/// Everything a strategy may look at when ranking components for one section.
#[derive(Debug, Clone)]
pub struct SectionContext {
    pub section: SectionKind,
    pub item_count: usize,
    pub layout: LayoutHint,
    pub archetype: Archetype,
    pub section_tier: RichnessTier,
    pub portfolio_tier: RichnessTier,
    /// Number of projects in the CV, whatever section is being ranked.
    pub project_count: usize,
}

pub trait ComponentSelector: Send + Sync {
    fn name(&self) -> &'static str;

    /// Candidates in order of preference. The first entry is the ideal choice.
    fn candidates(&self, ctx: &SectionContext) -> Vec<ComponentType>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorStrategy {
    Rule,
    Smart,
}

impl SelectorStrategy {
    pub fn build(&self) -> Arc<dyn ComponentSelector> {
        match self {
            SelectorStrategy::Rule => Arc::new(RuleSelector),
            SelectorStrategy::Smart => Arc::new(SmartSelector),
        }
    }
}

impl FromStr for SelectorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rule" | "rules" | "basic" => Ok(SelectorStrategy::Rule),
            "smart" => Ok(SelectorStrategy::Smart),
            other => Err(format!("unknown selector strategy '{other}' (expected 'smart' or 'rule')")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert_eq!("smart".parse::<SelectorStrategy>(), Ok(SelectorStrategy::Smart));
        assert_eq!(" Rule ".parse::<SelectorStrategy>(), Ok(SelectorStrategy::Rule));
        assert_eq!("basic".parse::<SelectorStrategy>(), Ok(SelectorStrategy::Rule));
        assert!("fancy".parse::<SelectorStrategy>().is_err());
    }

    #[test]
    fn test_build_returns_named_selector() {
        assert_eq!(SelectorStrategy::Smart.build().name(), "smart");
        assert_eq!(SelectorStrategy::Rule.build().name(), "rule");
    }
}
