//! Rule selector: one fixed component per section, with a layout override for projects.

use crate::models::cv::SectionKind;
use crate::registry::ComponentType;
use crate::selection::layout::LayoutHint;
use crate::selection::strategy::{ComponentSelector, SectionContext};

pub struct RuleSelector;

impl ComponentSelector for RuleSelector {
    fn name(&self) -> &'static str {
        "rule"
    }

    fn candidates(&self, ctx: &SectionContext) -> Vec<ComponentType> {
        vec![rule_for(ctx.section, ctx.layout)]
    }
}

/// Component chosen for a project list by item-count layout.
pub fn component_for_layout(layout: LayoutHint) -> ComponentType {
    match layout {
        LayoutHint::Row => ComponentType::CardHoverEffect,
        LayoutHint::Grid => ComponentType::BentoGrid,
        LayoutHint::Carousel => ComponentType::AppleCardsCarousel,
    }
}

fn rule_for(section: SectionKind, layout: LayoutHint) -> ComponentType {
    match section {
        SectionKind::Hero => ComponentType::HeroHighlight,
        SectionKind::About => ComponentType::TextGenerateEffect,
        SectionKind::Experience | SectionKind::Volunteer => ComponentType::Timeline,
        SectionKind::Education => ComponentType::TracingBeam,
        SectionKind::Skills => ComponentType::InfiniteMovingCards,
        SectionKind::Projects => component_for_layout(layout),
        SectionKind::Achievements | SectionKind::Highlights | SectionKind::Certifications => {
            ComponentType::CardHoverEffect
        }
        SectionKind::Publications => ComponentType::ExpandableCard,
        SectionKind::Awards => ComponentType::WobbleCard,
        SectionKind::Languages | SectionKind::Interests => ComponentType::SimpleList,
        SectionKind::Testimonials => ComponentType::AnimatedTestimonials,
        SectionKind::Contact => ComponentType::FloatingDock,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::archetype::Archetype;
    use crate::selection::richness::RichnessTier;

    fn ctx(section: SectionKind, item_count: usize) -> SectionContext {
        SectionContext {
            section,
            item_count,
            layout: LayoutHint::for_count(item_count),
            archetype: Archetype::Creative,
            section_tier: RichnessTier::Standard,
            portfolio_tier: RichnessTier::Standard,
            project_count: 0,
        }
    }

    #[test]
    fn test_static_rules_ignore_archetype() {
        let selector = RuleSelector;
        assert_eq!(
            selector.candidates(&ctx(SectionKind::Experience, 4)),
            vec![ComponentType::Timeline]
        );
        assert_eq!(
            selector.candidates(&ctx(SectionKind::Hero, 1)),
            vec![ComponentType::HeroHighlight]
        );
    }

    #[test]
    fn test_projects_follow_item_count() {
        let selector = RuleSelector;
        assert_eq!(
            selector.candidates(&ctx(SectionKind::Projects, 2)),
            vec![ComponentType::CardHoverEffect]
        );
        assert_eq!(
            selector.candidates(&ctx(SectionKind::Projects, 5)),
            vec![ComponentType::BentoGrid]
        );
        assert_eq!(
            selector.candidates(&ctx(SectionKind::Projects, 12)),
            vec![ComponentType::AppleCardsCarousel]
        );
    }

    #[test]
    fn test_every_section_has_a_rule() {
        for section in SectionKind::ALL {
            assert_eq!(RuleSelector.candidates(&ctx(section, 1)).len(), 1);
        }
    }
}
