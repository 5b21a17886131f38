//! Smart selector: archetype- and layout-aware candidate ranking.
//!
//! Each (section, archetype) pair maps to an ordered list. The first entry is
//! the preference; later entries stand in when it is already taken by another
//! section. A first entry that cannot hold the item count goes through its
//! registry fallback instead.

use crate::models::cv::SectionKind;
use crate::registry::ComponentType as C;
use crate::selection::archetype::Archetype;
use crate::selection::layout::LayoutHint;
use crate::selection::richness::RichnessTier;
use crate::selection::strategy::{ComponentSelector, SectionContext};

/// A parallax hero needs enough thumbnails to fill its rows.
const PARALLAX_MIN_PROJECTS: usize = 5;

pub struct SmartSelector;

impl ComponentSelector for SmartSelector {
    fn name(&self) -> &'static str {
        "smart"
    }

    fn candidates(&self, ctx: &SectionContext) -> Vec<C> {
        use Archetype::*;

        match ctx.section {
            SectionKind::Hero => hero(ctx),
            SectionKind::About => vec![C::TextGenerateEffect],
            SectionKind::Experience => match ctx.archetype {
                // sticky scroll only reads well for a handful of roles
                Creative if ctx.layout != LayoutHint::Carousel => {
                    vec![C::StickyScrollReveal, C::Timeline]
                }
                _ => vec![C::Timeline, C::TracingBeam],
            },
            SectionKind::Projects => projects(ctx),
            SectionKind::Skills => match ctx.archetype {
                Technical => vec![C::Tabs, C::InfiniteMovingCards, C::CardHoverEffect],
                Creative => vec![C::InfiniteMovingCards, C::AnimatedTooltip],
                Business => vec![C::CardHoverEffect, C::Tabs],
                General => vec![C::InfiniteMovingCards, C::CardHoverEffect],
            },
            SectionKind::Education => match ctx.archetype {
                Business => vec![C::Timeline, C::TracingBeam, C::CardHoverEffect],
                _ => vec![C::TracingBeam, C::Timeline, C::CardHoverEffect],
            },
            SectionKind::Achievements | SectionKind::Highlights => match ctx.archetype {
                Creative => vec![C::WobbleCard, C::CardHoverEffect],
                _ => vec![C::CardHoverEffect, C::WobbleCard],
            },
            SectionKind::Certifications => match ctx.archetype {
                Technical => vec![C::ThreeDCard, C::CardHoverEffect, C::ExpandableCard],
                _ => vec![C::CardHoverEffect, C::ExpandableCard],
            },
            SectionKind::Publications => vec![C::ExpandableCard, C::CardHoverEffect],
            SectionKind::Awards => vec![C::WobbleCard, C::CardHoverEffect],
            SectionKind::Volunteer => vec![C::TracingBeam, C::Timeline, C::CardHoverEffect],
            SectionKind::Languages => vec![C::AnimatedTooltip, C::SimpleList],
            SectionKind::Interests => match ctx.archetype {
                Creative => vec![C::FocusCards, C::InfiniteMovingCards, C::SimpleList],
                _ => vec![C::InfiniteMovingCards, C::SimpleList],
            },
            SectionKind::Testimonials => vec![C::AnimatedTestimonials, C::InfiniteMovingCards],
            SectionKind::Contact => vec![C::FloatingDock, C::SimpleList],
        }
    }
}

fn hero(ctx: &SectionContext) -> Vec<C> {
    match ctx.archetype {
        Archetype::Creative
            if ctx.project_count >= PARALLAX_MIN_PROJECTS
                && ctx.portfolio_tier == RichnessTier::Premium =>
        {
            vec![C::HeroParallax, C::HeroHighlight]
        }
        Archetype::Technical => vec![C::Spotlight, C::HeroHighlight],
        Archetype::Business => vec![C::HeroHighlight, C::Spotlight],
        _ => vec![C::HeroHighlight],
    }
}

fn projects(ctx: &SectionContext) -> Vec<C> {
    use LayoutHint::*;

    // a short list of well-described projects earns a showcase card
    let showcase = ctx.section_tier == RichnessTier::Premium;

    match (ctx.archetype, ctx.layout) {
        (Archetype::Technical, Row) => vec![C::ThreeDCard, C::CardHoverEffect],
        (Archetype::Technical, Grid) => vec![C::BentoGrid, C::CardHoverEffect],
        (Archetype::Technical, Carousel) => vec![C::AppleCardsCarousel, C::FocusCards],

        (Archetype::Creative, Row) => vec![C::FocusCards, C::WobbleCard],
        (Archetype::Creative, Grid) => vec![C::LayoutGrid, C::FocusCards],
        (Archetype::Creative, Carousel) => vec![C::AppleCardsCarousel, C::FocusCards],

        (Archetype::Business, Row) if showcase => vec![C::ThreeDCard, C::CardHoverEffect],
        (Archetype::Business, Row) => vec![C::CardHoverEffect],
        (Archetype::Business, Grid) => vec![C::CardHoverEffect, C::BentoGrid],
        (Archetype::Business, Carousel) => vec![C::InfiniteMovingCards, C::AppleCardsCarousel],

        (Archetype::General, Row) if showcase => vec![C::ThreeDCard, C::CardHoverEffect],
        (Archetype::General, Row) => vec![C::CardHoverEffect],
        (Archetype::General, Grid) => vec![C::BentoGrid, C::CardHoverEffect],
        (Archetype::General, Carousel) => vec![C::AppleCardsCarousel, C::BentoGrid],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(section: SectionKind, archetype: Archetype, item_count: usize) -> SectionContext {
        SectionContext {
            section,
            item_count,
            layout: LayoutHint::for_count(item_count),
            archetype,
            section_tier: RichnessTier::Standard,
            portfolio_tier: RichnessTier::Standard,
            project_count: 0,
        }
    }

    #[test]
    fn test_technical_projects_by_layout() {
        let s = SmartSelector;
        assert_eq!(s.candidates(&ctx(SectionKind::Projects, Archetype::Technical, 2))[0], C::ThreeDCard);
        assert_eq!(s.candidates(&ctx(SectionKind::Projects, Archetype::Technical, 6))[0], C::BentoGrid);
        assert_eq!(
            s.candidates(&ctx(SectionKind::Projects, Archetype::Technical, 10))[0],
            C::AppleCardsCarousel
        );
    }

    #[test]
    fn test_creative_experience_uses_sticky_scroll_unless_long() {
        let s = SmartSelector;
        assert_eq!(
            s.candidates(&ctx(SectionKind::Experience, Archetype::Creative, 4))[0],
            C::StickyScrollReveal
        );
        assert_eq!(
            s.candidates(&ctx(SectionKind::Experience, Archetype::Creative, 12))[0],
            C::Timeline
        );
    }

    #[test]
    fn test_parallax_hero_requires_rich_creative_portfolio() {
        let s = SmartSelector;
        let mut c = ctx(SectionKind::Hero, Archetype::Creative, 1);
        assert_eq!(s.candidates(&c)[0], C::HeroHighlight);

        c.project_count = 6;
        c.portfolio_tier = RichnessTier::Premium;
        assert_eq!(s.candidates(&c)[0], C::HeroParallax);

        c.portfolio_tier = RichnessTier::Standard;
        assert_eq!(s.candidates(&c)[0], C::HeroHighlight);
    }

    #[test]
    fn test_premium_project_row_gets_showcase_cards() {
        let s = SmartSelector;
        let mut c = ctx(SectionKind::Projects, Archetype::Business, 2);
        assert_eq!(s.candidates(&c), vec![C::CardHoverEffect]);

        c.section_tier = RichnessTier::Premium;
        assert_eq!(s.candidates(&c), vec![C::ThreeDCard, C::CardHoverEffect]);

        // larger lists keep their layout-driven choice
        let mut c = ctx(SectionKind::Projects, Archetype::General, 8);
        c.section_tier = RichnessTier::Premium;
        assert_eq!(s.candidates(&c)[0], C::BentoGrid);
    }

    #[test]
    fn test_technical_hero_is_spotlight() {
        let s = SmartSelector;
        assert_eq!(s.candidates(&ctx(SectionKind::Hero, Archetype::Technical, 1))[0], C::Spotlight);
    }

    #[test]
    fn test_every_section_and_archetype_has_candidates() {
        let s = SmartSelector;
        for section in SectionKind::ALL {
            for archetype in [Archetype::Technical, Archetype::Creative, Archetype::Business, Archetype::General] {
                for count in [1, 5, 12] {
                    assert!(!s.candidates(&ctx(section, archetype, count)).is_empty());
                }
            }
        }
    }
}
