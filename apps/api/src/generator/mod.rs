//! Portfolio Generator: renders a `SelectionPlan` into a Next.js project.
//!
//! Flow: theme from archetype → scaffolding files → app shell →
//!       one section file per selection → data + README.
//!
//! Output is an in-memory `path → content` map; `archive` packs it as a zip or
//! writes it to disk.

pub mod archive;
pub mod templates;
pub mod theme;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::adapter::format::slug;
use crate::generator::archive::{zip_files, ArchiveError};
use crate::generator::theme::{globals_css, Theme};
use crate::models::cv::CvData;
use crate::models::selection::SelectionPlan;
use crate::registry::{ComponentRegistry, ComponentType};
use crate::selection::archetype::Archetype;

pub const SIMPLE_LIST_PATH: &str = "components/ui/simple-list.tsx";

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPortfolio {
    pub build_id: Uuid,
    pub archetype: Archetype,
    pub generated_at: DateTime<Utc>,
    /// Project-relative path → file content.
    pub files: BTreeMap<String, String>,
}

impl GeneratedPortfolio {
    #[cfg(test)]
    pub fn file(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn archive(&self) -> Result<Vec<u8>, ArchiveError> {
        zip_files(&self.files)
    }

    /// Archive download name, e.g. `ada-lovelace-portfolio.zip`.
    pub fn archive_name(&self, cv: &CvData) -> String {
        format!("{}.zip", project_name(cv))
    }
}

pub struct PortfolioGenerator {
    registry: Arc<ComponentRegistry>,
}

impl PortfolioGenerator {
    pub fn new(registry: Arc<ComponentRegistry>) -> Self {
        Self { registry }
    }

    pub fn generate(&self, cv: &CvData, plan: &SelectionPlan) -> GeneratedPortfolio {
        let build_id = Uuid::new_v4();
        let generated_at = Utc::now();
        let archetype = plan.profile.archetype;
        let theme = Theme::for_archetype(archetype);

        let mut files = BTreeMap::new();
        let mut add = |path: &str, content: String| {
            files.insert(path.to_string(), content);
        };

        add("package.json", templates::package_json(&project_name(cv)));
        add("tsconfig.json", templates::tsconfig_json());
        add("next.config.mjs", templates::NEXT_CONFIG.to_string());
        add("postcss.config.mjs", templates::POSTCSS_CONFIG.to_string());
        add("tailwind.config.ts", templates::tailwind_config(&theme));
        add("lib/utils.ts", templates::UTILS_TS.to_string());

        add("app/globals.css", globals_css(&theme, plan.density));
        add("app/layout.tsx", templates::layout_tsx(cv, &theme));
        add("app/page.tsx", templates::page_tsx(plan));

        for selection in &plan.selections {
            let import = self.registry.import_statement(selection.component_type);
            add(
                &format!(
                    "components/sections/{}.tsx",
                    selection.section.component_name()
                ),
                templates::section_tsx(selection, &import),
            );
        }

        if plan.uses(ComponentType::SimpleList) {
            add(SIMPLE_LIST_PATH, templates::SIMPLE_LIST_TSX.to_string());
        }

        let build = build_id.to_string();
        add(
            "data/portfolio.json",
            templates::portfolio_json(cv, plan, &build),
        );
        add(
            "README.md",
            templates::readme(cv, plan, &build, &generated_at.to_rfc3339()),
        );

        info!(
            "Generated portfolio {build_id}: {} files, {} sections, archetype={}",
            files.len(),
            plan.selections.len(),
            archetype.as_str()
        );

        GeneratedPortfolio {
            build_id,
            archetype,
            generated_at,
            files,
        }
    }
}

/// npm package name derived from the CV owner's name.
fn project_name(cv: &CvData) -> String {
    format!("{}-portfolio", slug(&cv.display_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::cv::SectionKind;
    use crate::selection::strategy::SelectorStrategy;
    use crate::selection::unified::{PlanOptions, UnifiedSelector};
    use serde_json::{json, Value};

    fn generate(cv_json: Value) -> (CvData, SelectionPlan, GeneratedPortfolio) {
        let registry = Arc::new(ComponentRegistry::builtin().unwrap());
        let selector = UnifiedSelector::new(registry.clone(), SelectorStrategy::Smart.build());
        let cv: CvData = serde_json::from_value(cv_json).unwrap();
        let plan = selector.plan(&cv, &PlanOptions::default());
        let portfolio = PortfolioGenerator::new(registry).generate(&cv, &plan);
        (cv, plan, portfolio)
    }

    fn sample_cv() -> Value {
        json!({
            "hero": { "name": "Ada Lovelace", "title": "Software Engineer" },
            "summary": "I write programs. Mostly for engines.",
            "experience": [
                { "title": "Analyst", "company": "Analytical Engine", "start_date": "1842" }
            ],
            "skills": ["Rust", "Mathematics", "Python"],
            "interests": ["Poetry"],
            "contact": { "email": "ada@example.com", "github": "github.com/ada" }
        })
    }

    #[test]
    fn test_generates_scaffolding_and_sections() {
        let (_, plan, portfolio) = generate(sample_cv());
        for path in [
            "package.json",
            "tsconfig.json",
            "next.config.mjs",
            "postcss.config.mjs",
            "tailwind.config.ts",
            "app/globals.css",
            "app/layout.tsx",
            "app/page.tsx",
            "lib/utils.ts",
            "data/portfolio.json",
            "README.md",
        ] {
            assert!(portfolio.file(path).is_some(), "{path} missing");
        }
        for selection in &plan.selections {
            let path = format!("components/sections/{}.tsx", selection.section.component_name());
            assert!(portfolio.file(&path).is_some(), "{path} missing");
        }
    }

    #[test]
    fn test_page_renders_sections_in_plan_order() {
        let (_, plan, portfolio) = generate(sample_cv());
        let page = portfolio.file("app/page.tsx").unwrap();
        let positions: Vec<usize> = plan
            .selections
            .iter()
            .map(|s| page.find(&format!("<{} />", s.section.component_name())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(page.find("<HeroSection />").unwrap() < page.find("<ContactSection />").unwrap());
    }

    #[test]
    fn test_section_file_imports_registry_component() {
        let (_, plan, portfolio) = generate(sample_cv());
        let experience = plan.selection_for(SectionKind::Experience).unwrap();
        assert_eq!(experience.component_type, ComponentType::Timeline);
        let file = portfolio.file("components/sections/ExperienceSection.tsx").unwrap();
        assert!(file.starts_with("\"use client\";"));
        assert!(file.contains("import { Timeline } from \"@/components/ui/timeline\";"));
        assert!(file.contains("export default function ExperienceSection()"));
        assert!(file.contains("\"heading\": \"Analyst\""));
    }

    #[test]
    fn test_simple_list_only_emitted_when_used() {
        // more languages than animated-tooltip holds fall back to simple-list
        let languages: Vec<String> = (0..13).map(|i| format!("Language {i}")).collect();
        let (_, plan, portfolio) = generate(json!({
            "experience": [{ "title": "Analyst" }],
            "languages": languages
        }));
        assert!(plan.uses(ComponentType::SimpleList));
        assert!(portfolio.file(SIMPLE_LIST_PATH).is_some());

        let (_, plan, portfolio) = generate(json!({
            "experience": [{ "title": "Analyst" }]
        }));
        assert!(!plan.uses(ComponentType::SimpleList));
        assert!(portfolio.file(SIMPLE_LIST_PATH).is_none());
    }

    #[test]
    fn test_portfolio_json_and_readme() {
        let (_, plan, portfolio) = generate(sample_cv());
        let data: Value = serde_json::from_str(portfolio.file("data/portfolio.json").unwrap()).unwrap();
        assert_eq!(data["build_id"], portfolio.build_id.to_string());
        assert_eq!(data["sections"].as_array().unwrap().len(), plan.selections.len());
        assert_eq!(data["sections"][0]["section"], "hero");

        let readme = portfolio.file("README.md").unwrap();
        assert!(readme.contains(&portfolio.build_id.to_string()));
        assert!(readme.contains("| Experience | `timeline` | 1 |"));
        assert!(readme.contains(&format!("- Density: {}", plan.density.as_str())));
        assert!(readme.contains("- Density: balanced"));
    }

    #[test]
    fn test_theme_follows_archetype() {
        let (_, plan, portfolio) = generate(sample_cv());
        assert_eq!(plan.profile.archetype, Archetype::Technical);
        assert_eq!(portfolio.archetype, Archetype::Technical);
        assert!(portfolio.file("app/globals.css").unwrap().contains("#22d3ee"));
    }

    #[test]
    fn test_user_text_cannot_break_out_of_literals() {
        let (_, _, portfolio) = generate(json!({
            "hero": { "name": "Eve\"; alert(1); //", "title": "Designer" },
            "projects": [{ "name": "</section>`${x}`", "description": "line\nbreak" }]
        }));
        let layout = portfolio.file("app/layout.tsx").unwrap();
        assert!(layout.contains(r#"Eve\"; alert(1); //"#));
        let projects = portfolio.file("components/sections/ProjectsSection.tsx").unwrap();
        assert!(projects.contains(r#"line\nbreak"#));
    }

    #[test]
    fn test_archive_contains_every_file() {
        let (cv, _, portfolio) = generate(sample_cv());
        let bytes = portfolio.archive().unwrap();
        let archive = zip::ZipArchive::new(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), portfolio.files.len());
        assert_eq!(portfolio.archive_name(&cv), "ada-lovelace-portfolio.zip");
    }

    #[test]
    fn test_build_ids_are_unique() {
        let (_, _, a) = generate(sample_cv());
        let (_, _, b) = generate(sample_cv());
        assert_ne!(a.build_id, b.build_id);
    }
}
