//! Per-component prop shaping.
//!
//! Every formatter takes the same `UniversalContent` list and returns the JSON
//! object the generated section file spreads into its UI component.

use serde_json::{json, Map, Value};

use crate::adapter::extract::UniversalContent;
use crate::models::cv::{CvData, SectionKind};
use crate::registry::ComponentType;

/// Used wherever a component needs an image and the CV has none.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.svg";

/// What the hero formatters need besides the section's own contents.
pub struct HeroContext<'a> {
    pub cv: &'a CvData,
    /// Project contents, used as the hero-parallax thumbnail wall.
    pub projects: &'a [UniversalContent],
}

pub fn format_props(
    component: ComponentType,
    section: SectionKind,
    contents: &[UniversalContent],
    hero: &HeroContext<'_>,
) -> Value {
    let mut props = match component {
        ComponentType::HeroHighlight => hero_highlight(hero),
        ComponentType::Spotlight => spotlight(hero),
        ComponentType::HeroParallax => hero_parallax(hero),
        ComponentType::TextGenerateEffect => text_generate(contents),
        ComponentType::Timeline => timeline(contents),
        ComponentType::TracingBeam => tracing_beam(contents),
        ComponentType::StickyScrollReveal => sticky_scroll(contents),
        ComponentType::BentoGrid => bento_grid(contents),
        ComponentType::CardHoverEffect => hover_cards(contents),
        ComponentType::FocusCards => focus_cards(contents),
        ComponentType::ExpandableCard => expandable_cards(contents),
        ComponentType::AppleCardsCarousel => carousel(section, contents),
        ComponentType::ThreeDCard => three_d_cards(contents),
        ComponentType::InfiniteMovingCards => moving_cards(section, contents),
        ComponentType::AnimatedTestimonials => testimonials(contents),
        ComponentType::AnimatedTooltip => tooltips(contents),
        ComponentType::Tabs => tabs(contents),
        ComponentType::LayoutGrid => layout_grid(contents),
        ComponentType::WobbleCard => wobble_cards(contents),
        ComponentType::FloatingDock => dock(contents),
        ComponentType::SimpleList => simple_list(contents),
    };

    if let Value::Object(map) = &mut props {
        map.insert("heading".to_string(), Value::String(section.title().to_string()));
    }
    props
}

// ────────────────────────────────────────────────────────────────────────────
// Hero family
// ────────────────────────────────────────────────────────────────────────────

fn hero_fields(hero: &HeroContext<'_>) -> Map<String, Value> {
    let cv = hero.cv;
    let title = cv.headline().unwrap_or_default();
    let summary = cv.about_text().unwrap_or_default();
    let details = cv.hero.as_ref();

    let mut map = Map::new();
    map.insert("name".to_string(), json!(cv.display_name()));
    map.insert("title".to_string(), json!(title));
    map.insert("summary".to_string(), json!(first_sentence(summary)));
    map.insert(
        "location".to_string(),
        json!(details.and_then(|h| h.location.clone()).unwrap_or_default()),
    );
    map.insert(
        "image".to_string(),
        json!(details
            .and_then(|h| h.profile_image.clone())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())),
    );
    map
}

fn hero_highlight(hero: &HeroContext<'_>) -> Value {
    let mut map = hero_fields(hero);
    let highlight = hero
        .cv
        .headline()
        .map(|title| last_words(title, 2))
        .unwrap_or_default();
    map.insert("highlight".to_string(), json!(highlight));
    Value::Object(map)
}

fn spotlight(hero: &HeroContext<'_>) -> Value {
    let mut map = hero_fields(hero);
    map.insert("fill".to_string(), json!("white"));
    Value::Object(map)
}

fn hero_parallax(hero: &HeroContext<'_>) -> Value {
    let mut map = hero_fields(hero);
    let products: Vec<Value> = hero
        .projects
        .iter()
        .map(|c| {
            json!({
                "title": c.primary,
                "link": link(c),
                "thumbnail": image(c),
            })
        })
        .collect();
    map.insert("products".to_string(), Value::Array(products));
    Value::Object(map)
}

fn text_generate(contents: &[UniversalContent]) -> Value {
    let words = contents
        .iter()
        .map(|c| c.primary.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    json!({ "words": words })
}

// ────────────────────────────────────────────────────────────────────────────
// Chronological
// ────────────────────────────────────────────────────────────────────────────

fn timeline(contents: &[UniversalContent]) -> Value {
    let data: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "title": c.meta_str("date_range").unwrap_or(c.primary.as_str()),
                "heading": c.primary,
                "subheading": c.secondary.clone().unwrap_or_default(),
                "description": c.tertiary.clone().unwrap_or_default(),
                "tags": c.tags(),
            })
        })
        .collect();
    json!({ "data": data })
}

fn tracing_beam(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "title": c.primary,
                "badge": c.meta_str("date_range")
                    .map(str::to_string)
                    .or_else(|| c.secondary.clone())
                    .unwrap_or_default(),
                "description": joined(c),
                "image": c.meta_str("image"),
            })
        })
        .collect();
    json!({ "items": items })
}

fn sticky_scroll(contents: &[UniversalContent]) -> Value {
    let content: Vec<Value> = contents
        .iter()
        .map(|c| json!({ "title": c.primary, "description": joined(c) }))
        .collect();
    json!({ "content": content })
}

// ────────────────────────────────────────────────────────────────────────────
// Card collections
// ────────────────────────────────────────────────────────────────────────────

fn bento_grid(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "title": c.primary,
                "description": description(c),
                "header": image(c),
                "tags": c.tags(),
                // every 4th and 7th tile spans two columns
                "className": if i % 7 == 3 || i % 7 == 6 { "md:col-span-2" } else { "" },
            })
        })
        .collect();
    json!({ "items": items })
}

fn hover_cards(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "title": c.primary,
                "description": description(c),
                "link": link(c),
            })
        })
        .collect();
    json!({ "items": items })
}

fn focus_cards(contents: &[UniversalContent]) -> Value {
    let cards: Vec<Value> = contents
        .iter()
        .map(|c| json!({ "title": c.primary, "src": image(c) }))
        .collect();
    json!({ "cards": cards })
}

fn expandable_cards(contents: &[UniversalContent]) -> Value {
    let cards: Vec<Value> = contents
        .iter()
        .map(|c| {
            let has_link = c.meta_str("link").is_some();
            json!({
                "title": c.primary,
                "description": c.secondary.clone().unwrap_or_default(),
                "src": image(c),
                "ctaText": if has_link { "Open" } else { "Details" },
                "ctaLink": link(c),
                "content": c.tertiary.clone().unwrap_or_default(),
            })
        })
        .collect();
    json!({ "cards": cards })
}

fn carousel(section: SectionKind, contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "category": c.meta_str("category")
                    .map(str::to_string)
                    .unwrap_or_else(|| section.title().to_string()),
                "title": c.primary,
                "src": image(c),
                "content": joined(c),
            })
        })
        .collect();
    json!({ "items": items })
}

fn three_d_cards(contents: &[UniversalContent]) -> Value {
    let cards: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "title": c.primary,
                "description": description(c),
                "image": image(c),
                "link": link(c),
            })
        })
        .collect();
    json!({ "cards": cards })
}

fn moving_cards(section: SectionKind, contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            if section == SectionKind::Testimonials {
                json!({
                    "quote": c.primary,
                    "name": c.secondary.clone().unwrap_or_else(|| "Anonymous".to_string()),
                    "title": c.tertiary.clone().unwrap_or_default(),
                })
            } else {
                json!({
                    "quote": description(c),
                    "name": c.primary,
                    "title": c.meta_str("date_range").unwrap_or_default(),
                })
            }
        })
        .collect();
    let speed = if contents.len() > 12 { "normal" } else { "slow" };
    json!({ "items": items, "direction": "left", "speed": speed })
}

fn testimonials(contents: &[UniversalContent]) -> Value {
    let testimonials: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "quote": c.primary,
                "name": c.secondary.clone().unwrap_or_else(|| "Anonymous".to_string()),
                "designation": c.tertiary.clone().unwrap_or_default(),
                "src": image(c),
            })
        })
        .collect();
    json!({ "testimonials": testimonials, "autoplay": true })
}

fn tooltips(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "id": i + 1,
                "name": c.primary,
                "designation": c.secondary.clone().unwrap_or_default(),
                "image": image(c),
            })
        })
        .collect();
    json!({ "items": items })
}

fn tabs(contents: &[UniversalContent]) -> Value {
    let tabs: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "title": c.primary,
                "value": format!("{}-{}", slug(&c.primary), i + 1),
                "description": description(c),
                "tags": c.tags(),
            })
        })
        .collect();
    json!({ "tabs": tabs })
}

fn layout_grid(contents: &[UniversalContent]) -> Value {
    let cards: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "id": i + 1,
                "title": c.primary,
                "description": description(c),
                "thumbnail": image(c),
                "className": if i % 3 == 0 { "md:col-span-2" } else { "col-span-1" },
            })
        })
        .collect();
    json!({ "cards": cards })
}

const WOBBLE_COLORS: [&str; 4] = ["bg-pink-800", "bg-indigo-800", "bg-emerald-800", "bg-amber-700"];

fn wobble_cards(contents: &[UniversalContent]) -> Value {
    let cards: Vec<Value> = contents
        .iter()
        .enumerate()
        .map(|(i, c)| {
            json!({
                "title": c.primary,
                "description": description(c),
                "className": WOBBLE_COLORS[i % WOBBLE_COLORS.len()],
            })
        })
        .collect();
    json!({ "cards": cards })
}

fn dock(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            let href = c
                .meta_str("link")
                .map(str::to_string)
                .or_else(|| c.secondary.clone())
                .unwrap_or_else(|| "#".to_string());
            json!({
                "title": c.primary,
                "href": href,
                "icon": icon_for(&c.primary, &href),
            })
        })
        .collect();
    json!({ "items": items })
}

fn simple_list(contents: &[UniversalContent]) -> Value {
    let items: Vec<Value> = contents
        .iter()
        .map(|c| {
            json!({
                "primary": c.primary,
                "secondary": c.secondary.clone().unwrap_or_default(),
                "tertiary": c.tertiary.clone().unwrap_or_default(),
            })
        })
        .collect();
    json!({ "items": items })
}

// ────────────────────────────────────────────────────────────────────────────
// Helpers
// ────────────────────────────────────────────────────────────────────────────

fn description(c: &UniversalContent) -> String {
    c.secondary
        .clone()
        .or_else(|| c.tertiary.clone())
        .unwrap_or_default()
}

/// Secondary and tertiary joined into one paragraph.
fn joined(c: &UniversalContent) -> String {
    [c.secondary.as_deref(), c.tertiary.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ")
}

fn image(c: &UniversalContent) -> String {
    c.meta_str("image").unwrap_or(PLACEHOLDER_IMAGE).to_string()
}

fn link(c: &UniversalContent) -> String {
    c.meta_str("link").unwrap_or("#").to_string()
}

fn icon_for(label: &str, href: &str) -> &'static str {
    let label = label.to_lowercase();
    if href.starts_with("mailto:") || label.contains("mail") {
        "mail"
    } else if href.starts_with("tel:") || label.contains("phone") {
        "phone"
    } else if label.contains("github") || href.contains("github.com") {
        "github"
    } else if label.contains("linkedin") || href.contains("linkedin.com") {
        "linkedin"
    } else if label.contains("twitter") || href.contains("twitter.com") || href.contains("x.com") {
        "twitter"
    } else {
        "globe"
    }
}

pub fn slug(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() {
        "item".to_string()
    } else {
        trimmed.to_string()
    }
}

fn first_sentence(text: &str) -> String {
    match text.find(". ") {
        Some(idx) => text[..=idx].to_string(),
        None => text.to_string(),
    }
}

fn last_words(text: &str, n: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    let start = words.len().saturating_sub(n);
    words[start..].join(" ")
}
