//! Unified Selector: turns a CV into a `SelectionPlan`.
//!
//! Flow: detect archetype → score richness → collect present sections →
//!       merge sparse sections (optional) → rank candidates via the strategy →
//!       apply registry bounds, duplicate avoidance and fallbacks →
//!       adapt props → order by priority.
//!
//! Nothing here fails: unusable input degrades to a fallback component, a
//! placeholder value, or a `Suggestion` explaining what was skipped.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::adapter::extract::{scalar_text, PLACEHOLDER_TITLE};
use crate::adapter::UniversalAdapter;
use crate::models::cv::{CvData, SectionKind};
use crate::models::selection::{ComponentSelection, SelectionPlan, Suggestion};
use crate::registry::{ComponentRegistry, ComponentType, Resolution};
use crate::selection::archetype::detect_archetype;
use crate::selection::layout::{LayoutHint, PageDensity};
use crate::selection::richness::{score_portfolio, score_section, RichnessTier};
use crate::selection::strategy::{ComponentSelector, SectionContext};

/// Hero always opens the page and contact always closes it.
const HERO_PRIORITY: i32 = 1000;
const CONTACT_PRIORITY: i32 = 0;

/// A minor section with at most this many items counts as sparse.
const SPARSE_MAX_ITEMS: usize = 2;
/// Merging is only suggested once this many sections are sparse.
const MERGE_MIN_SECTIONS: usize = 2;

/// Caller-controlled knobs for one planning run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Section key → component key or alias, e.g. `{"projects": "carousel"}`.
    pub overrides: BTreeMap<String, String>,
    /// Replace sparse minor sections with one `highlights` section.
    pub merge_sparse_sections: bool,
}

pub struct UnifiedSelector {
    registry: Arc<ComponentRegistry>,
    strategy: Arc<dyn ComponentSelector>,
    adapter: UniversalAdapter,
}

impl UnifiedSelector {
    pub fn new(registry: Arc<ComponentRegistry>, strategy: Arc<dyn ComponentSelector>) -> Self {
        Self {
            registry,
            strategy,
            adapter: UniversalAdapter::new(),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn plan(&self, cv: &CvData, options: &PlanOptions) -> SelectionPlan {
        let profile = detect_archetype(cv);
        let richness = score_portfolio(cv);
        info!(
            "Planning portfolio for {}: archetype={} richness={:?} ({:.1})",
            cv.display_name(),
            profile.archetype.as_str(),
            richness.tier,
            richness.total_score
        );

        let mut suggestions = Vec::new();
        let mut sections = collect_sections(cv, &mut suggestions);
        merge_sparse_sections(&mut sections, options.merge_sparse_sections, &mut suggestions);
        let overrides = self.resolve_overrides(&options.overrides);

        let total_items: usize = sections.iter().map(|(_, items)| items.len()).sum();
        let density = PageDensity::assess(sections.len(), total_items);
        let project_count = cv
            .section_items(SectionKind::Projects)
            .map(|items| items.len())
            .unwrap_or(0);

        let mut used: HashSet<ComponentType> = HashSet::new();
        let mut selections = Vec::with_capacity(sections.len());

        for (section, items) in sections {
            let item_count = items.len();
            let section_tier = if section == SectionKind::Highlights {
                score_section(section, &items).tier
            } else {
                richness.tier_for(section)
            };
            let ctx = SectionContext {
                section,
                item_count,
                layout: LayoutHint::for_count(item_count),
                archetype: profile.archetype,
                section_tier,
                portfolio_tier: richness.tier,
                project_count,
            };

            let resolution = match overrides.get(&section) {
                Some(&component) => {
                    debug!("Override for {}: {component}", section.as_str());
                    self.registry.resolve_for_count(component, item_count)
                }
                None => self.choose(&ctx, &used),
            };

            if let Some(from) = resolution.fell_back_from {
                let reason = self.fallback_reason(from, item_count);
                warn!("{}: {reason}; using {}", section.as_str(), resolution.component);
                suggestions.push(Suggestion::Fallback {
                    section,
                    from,
                    to: resolution.component,
                    reason,
                });
            }

            let component = resolution.component;
            used.insert(component);

            let props = self
                .adapter
                .adapt(&self.registry, component, section, &items, cv);

            selections.push(ComponentSelection {
                section,
                component_type: component,
                import_path: self.registry.import_path(component),
                named_exports: self.registry.named_exports(component),
                props,
                priority: priority(section, section_tier),
                layout: ctx.layout,
                item_count,
            });
        }

        selections.sort_by(|a, b| {
            b.priority
                .cmp(&a.priority)
                .then_with(|| a.section.cmp(&b.section))
        });

        info!(
            "Selected {} components ({} suggestions) with the {} strategy",
            selections.len(),
            suggestions.len(),
            self.strategy.name()
        );

        SelectionPlan {
            strategy: self.strategy.name().to_string(),
            profile,
            richness,
            density,
            selections,
            suggestions,
        }
    }

    /// The top candidate decides: if it cannot hold the item count it goes
    /// through its registered fallback chain. Later candidates only stand in
    /// when the top one fits but is already on the page.
    fn choose(&self, ctx: &SectionContext, used: &HashSet<ComponentType>) -> Resolution {
        let candidates = self.strategy.candidates(ctx);
        let count = ctx.item_count;
        let top = candidates
            .first()
            .copied()
            .unwrap_or(ComponentType::SimpleList);

        if !self.registry.accepts(top, count) {
            return self.registry.resolve_for_count(top, count);
        }

        let component = if used.contains(&top) {
            match candidates
                .iter()
                .skip(1)
                .find(|c| !used.contains(*c) && self.registry.accepts(**c, count))
            {
                Some(&alternative) => alternative,
                None => {
                    debug!(
                        "All candidates for {} already used; reusing {top}",
                        ctx.section.as_str()
                    );
                    top
                }
            }
        } else {
            top
        };

        Resolution {
            component,
            fell_back_from: None,
        }
    }

    fn fallback_reason(&self, from: ComponentType, count: usize) -> String {
        match self.registry.spec(from) {
            Some(spec) => format!(
                "{from} holds {}-{} items but the section has {count}",
                spec.min_items, spec.max_items
            ),
            None => format!("{from} is not in the component registry"),
        }
    }

    fn resolve_overrides(&self, raw: &BTreeMap<String, String>) -> HashMap<SectionKind, ComponentType> {
        let mut resolved = HashMap::new();
        for (section_key, component_key) in raw {
            let Some(section) = SectionKind::from_key(section_key) else {
                warn!("Ignoring override for unknown section '{section_key}'");
                continue;
            };
            match self.registry.resolve(component_key) {
                Some(component) if component.is_hero() && section != SectionKind::Hero => warn!(
                    "Ignoring override '{component_key}' for {section_key}: hero components only render the hero section"
                ),
                Some(component) => {
                    resolved.insert(section, component);
                }
                None => warn!(
                    "Ignoring override '{component_key}' for {section_key}: not a selectable component"
                ),
            }
        }
        resolved
    }
}

/// Present sections in canonical order. Sections the CV lacks are skipped
/// silently; sections present but empty are reported.
fn collect_sections(cv: &CvData, suggestions: &mut Vec<Suggestion>) -> Vec<(SectionKind, Vec<Value>)> {
    let mut sections = Vec::new();
    for kind in SectionKind::ALL {
        match cv.section_items(kind) {
            None => debug!("CV has no {} section; skipping", kind.as_str()),
            Some(items) if items.is_empty() => {
                suggestions.push(Suggestion::Skip {
                    section: kind,
                    reason: "section is present but has no items".to_string(),
                });
            }
            Some(items) => sections.push((kind, items)),
        }
    }
    sections
}

fn merge_sparse_sections(
    sections: &mut Vec<(SectionKind, Vec<Value>)>,
    apply: bool,
    suggestions: &mut Vec<Suggestion>,
) {
    let sparse: Vec<SectionKind> = sections
        .iter()
        .filter(|(kind, items)| kind.is_minor() && items.len() <= SPARSE_MAX_ITEMS)
        .map(|(kind, _)| *kind)
        .collect();

    if sparse.len() < MERGE_MIN_SECTIONS {
        return;
    }

    suggestions.push(Suggestion::Merge {
        sections: sparse.clone(),
        into: SectionKind::Highlights,
    });

    if !apply {
        return;
    }

    let mut merged = Vec::new();
    sections.retain(|(kind, items)| {
        if !sparse.contains(kind) {
            return true;
        }
        merged.extend(items.iter().map(|item| tag_category(item, *kind)));
        false
    });

    info!("Merged {} sparse sections into highlights", sparse.len());
    sections.push((SectionKind::Highlights, merged));
    sections.sort_by_key(|(kind, _)| *kind);
}

/// Carries the originating section along as `category` so merged items stay labelled.
fn tag_category(item: &Value, origin: SectionKind) -> Value {
    match item {
        Value::Object(obj) => {
            let mut obj = obj.clone();
            obj.entry("category")
                .or_insert_with(|| Value::String(origin.title().to_string()));
            Value::Object(obj)
        }
        other => json!({
            "title": scalar_text(other).unwrap_or_else(|| PLACEHOLDER_TITLE.to_string()),
            "category": origin.title(),
        }),
    }
}

fn priority(section: SectionKind, tier: RichnessTier) -> i32 {
    match section {
        SectionKind::Hero => HERO_PRIORITY,
        SectionKind::Contact => CONTACT_PRIORITY,
        other => other.base_priority() + tier.priority_bonus(),
    }
}
