// Universal Adapter: CV items → UniversalContent → per-component props.
// Pure functions only; the selector decides which component a section gets.

pub mod extract;
pub mod format;

use serde_json::Value;
use tracing::warn;

use crate::models::cv::{CvData, SectionKind};
use crate::registry::{ComponentRegistry, ComponentType};

use extract::extract_all;
use format::HeroContext;

/// Shapes section items into the prop object a component expects.
#[derive(Debug, Clone, Default)]
pub struct UniversalAdapter;

impl UniversalAdapter {
    pub fn new() -> Self {
        Self
    }

    /// Extracts, truncates to the component's `max_items`, then formats.
    pub fn adapt(
        &self,
        registry: &ComponentRegistry,
        component: ComponentType,
        section: SectionKind,
        items: &[Value],
        cv: &CvData,
    ) -> Value {
        let mut contents = extract_all(section, items);

        if let Some(max) = registry.max_items(component) {
            if contents.len() > max {
                warn!(
                    "{} has {} items; {} shows at most {max}, truncating",
                    section.as_str(),
                    contents.len(),
                    component
                );
                contents.truncate(max);
            }
        }

        let projects = if component == ComponentType::HeroParallax {
            cv.section_items(SectionKind::Projects)
                .map(|items| extract_all(SectionKind::Projects, &items))
                .unwrap_or_default()
        } else {
            Vec::new()
        };

        format::format_props(
            component,
            section,
            &contents,
            &HeroContext {
                cv,
                projects: &projects,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_adapt_truncates_to_max_items() {
        let registry = ComponentRegistry::builtin().unwrap();
        let items: Vec<Value> = (0..6).map(|i| json!({ "title": format!("Award {i}") })).collect();
        let props = UniversalAdapter::new().adapt(
            &registry,
            ComponentType::WobbleCard,
            SectionKind::Awards,
            &items,
            &CvData::default(),
        );
        // wobble-card caps at 4
        assert_eq!(props["cards"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_adapt_is_deterministic() {
        let registry = ComponentRegistry::builtin().unwrap();
        let items = vec![json!({ "name": "Alpha", "description": "First" }), json!("Beta")];
        let adapter = UniversalAdapter::new();
        let cv = CvData::default();
        let a = adapter.adapt(&registry, ComponentType::BentoGrid, SectionKind::Projects, &items, &cv);
        let b = adapter.adapt(&registry, ComponentType::BentoGrid, SectionKind::Projects, &items, &cv);
        assert_eq!(a, b);
        assert_eq!(a["items"][1]["title"], "Beta");
    }

    #[test]
    fn test_hero_parallax_pulls_projects_from_cv() {
        let registry = ComponentRegistry::builtin().unwrap();
        let cv: CvData = serde_json::from_value(json!({
            "hero": { "name": "Ada" },
            "projects": [{ "name": "Engine" }, { "name": "Notes" }]
        }))
        .unwrap();
        let hero = cv.section_items(SectionKind::Hero).unwrap();
        let props = UniversalAdapter::new().adapt(
            &registry,
            ComponentType::HeroParallax,
            SectionKind::Hero,
            &hero,
            &cv,
        );
        assert_eq!(props["products"][1]["title"], "Notes");
        assert_eq!(props["name"], "Ada");
    }
}
