use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::cv::SectionKind;
use crate::registry::ComponentType;
use crate::selection::archetype::ArchetypeProfile;
use crate::selection::layout::{LayoutHint, PageDensity};
use crate::selection::richness::PortfolioRichness;

/// One section of the generated page and the component rendering it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentSelection {
    pub section: SectionKind,
    pub component_type: ComponentType,
    pub import_path: String,
    pub named_exports: Vec<String>,
    pub props: Value,
    /// Higher renders earlier.
    pub priority: i32,
    pub layout: LayoutHint,
    pub item_count: usize,
}

/// Advisory notes produced while planning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Suggestion {
    /// Several sparse sections would read better as one.
    Merge {
        sections: Vec<SectionKind>,
        into: SectionKind,
    },
    /// The preferred component could not hold the section's items.
    Fallback {
        section: SectionKind,
        from: ComponentType,
        to: ComponentType,
        reason: String,
    },
    /// The section exists in the CV but had nothing to render.
    Skip { section: SectionKind, reason: String },
}

/// Full output of the unified selector; the generator consumes `selections`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionPlan {
    pub strategy: String,
    pub profile: ArchetypeProfile,
    pub richness: PortfolioRichness,
    pub density: PageDensity,
    /// Sorted by priority, highest first.
    pub selections: Vec<ComponentSelection>,
    pub suggestions: Vec<Suggestion>,
}

impl SelectionPlan {
    #[cfg(test)]
    pub fn selection_for(&self, section: SectionKind) -> Option<&ComponentSelection> {
        self.selections.iter().find(|s| s.section == section)
    }

    pub fn uses(&self, component: ComponentType) -> bool {
        self.selections.iter().any(|s| s.component_type == component)
    }
}
