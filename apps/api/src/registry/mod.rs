//! Component Registry: static catalog of UI components the generator can emit.
//!
//! The catalog is a JSON document keyed by component key:
//! `{key: {import, named_exports, min_items, max_items, fallback, aliases}}`.
//! A built-in copy ships with the binary; `COMPONENT_REGISTRY_PATH` swaps in another.

pub mod handlers;

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const BUILTIN_REGISTRY: &str = include_str!("../../registry/components.json");

// ────────────────────────────────────────────────────────────────────────────
// Component types
// ────────────────────────────────────────────────────────────────────────────

/// A UI component the adapter knows how to shape props for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentType {
    HeroHighlight,
    HeroParallax,
    Spotlight,
    TextGenerateEffect,
    Timeline,
    TracingBeam,
    StickyScrollReveal,
    BentoGrid,
    CardHoverEffect,
    FocusCards,
    ExpandableCard,
    AppleCardsCarousel,
    ThreeDCard,
    InfiniteMovingCards,
    AnimatedTestimonials,
    AnimatedTooltip,
    Tabs,
    LayoutGrid,
    WobbleCard,
    FloatingDock,
    SimpleList,
}

impl ComponentType {
    pub const ALL: [ComponentType; 21] = [
        ComponentType::HeroHighlight,
        ComponentType::HeroParallax,
        ComponentType::Spotlight,
        ComponentType::TextGenerateEffect,
        ComponentType::Timeline,
        ComponentType::TracingBeam,
        ComponentType::StickyScrollReveal,
        ComponentType::BentoGrid,
        ComponentType::CardHoverEffect,
        ComponentType::FocusCards,
        ComponentType::ExpandableCard,
        ComponentType::AppleCardsCarousel,
        ComponentType::ThreeDCard,
        ComponentType::InfiniteMovingCards,
        ComponentType::AnimatedTestimonials,
        ComponentType::AnimatedTooltip,
        ComponentType::Tabs,
        ComponentType::LayoutGrid,
        ComponentType::WobbleCard,
        ComponentType::FloatingDock,
        ComponentType::SimpleList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentType::HeroHighlight => "hero-highlight",
            ComponentType::HeroParallax => "hero-parallax",
            ComponentType::Spotlight => "spotlight",
            ComponentType::TextGenerateEffect => "text-generate-effect",
            ComponentType::Timeline => "timeline",
            ComponentType::TracingBeam => "tracing-beam",
            ComponentType::StickyScrollReveal => "sticky-scroll-reveal",
            ComponentType::BentoGrid => "bento-grid",
            ComponentType::CardHoverEffect => "card-hover-effect",
            ComponentType::FocusCards => "focus-cards",
            ComponentType::ExpandableCard => "expandable-card",
            ComponentType::AppleCardsCarousel => "apple-cards-carousel",
            ComponentType::ThreeDCard => "three-d-card",
            ComponentType::InfiniteMovingCards => "infinite-moving-cards",
            ComponentType::AnimatedTestimonials => "animated-testimonials",
            ComponentType::AnimatedTooltip => "animated-tooltip",
            ComponentType::Tabs => "tabs",
            ComponentType::LayoutGrid => "layout-grid",
            ComponentType::WobbleCard => "wobble-card",
            ComponentType::FloatingDock => "floating-dock",
            ComponentType::SimpleList => "simple-list",
        }
    }

    /// Hero components render the CV owner's headline, not a section's items.
    pub fn is_hero(&self) -> bool {
        matches!(
            self,
            ComponentType::HeroHighlight | ComponentType::HeroParallax | ComponentType::Spotlight
        )
    }

    /// Conventional import path used when a registry lacks the component.
    pub fn default_import_path(&self) -> String {
        format!("@/components/ui/{}", self.as_str())
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentType {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ComponentType::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownComponent(s.to_string()))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Registry document
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Failed to read registry file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Registry JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Registry is invalid: {0}")]
    Invalid(String),

    #[error("Unknown component: {0}")]
    UnknownComponent(String),
}

/// Metadata for a single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Module path the generated code imports from.
    #[serde(rename = "import")]
    pub import_path: String,
    pub named_exports: Vec<String>,
    #[serde(default)]
    pub min_items: usize,
    #[serde(default = "default_max_items")]
    pub max_items: usize,
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub aliases: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

fn default_max_items() -> usize {
    usize::MAX
}

/// Outcome of fitting a component to an item count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub component: ComponentType,
    /// The originally requested component when a fallback replaced it.
    pub fell_back_from: Option<ComponentType>,
}

#[derive(Debug, Clone)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentSpec>,
    aliases: HashMap<String, String>,
}

impl ComponentRegistry {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, RegistryError> {
        let components: BTreeMap<String, ComponentSpec> = serde_json::from_str(raw)?;
        Self::from_components(components)
    }

    fn from_components(components: BTreeMap<String, ComponentSpec>) -> Result<Self, RegistryError> {
        if components.is_empty() {
            return Err(RegistryError::Invalid("registry has no components".to_string()));
        }

        let mut aliases = HashMap::new();

        for (key, spec) in &components {
            if spec.min_items > spec.max_items {
                return Err(RegistryError::Invalid(format!(
                    "{key}: min_items ({}) exceeds max_items ({})",
                    spec.min_items, spec.max_items
                )));
            }
            if let Some(fallback) = &spec.fallback {
                if !components.contains_key(fallback) {
                    return Err(RegistryError::Invalid(format!(
                        "{key}: fallback '{fallback}' is not a registered component"
                    )));
                }
            }
            for alias in &spec.aliases {
                if components.contains_key(alias) {
                    return Err(RegistryError::Invalid(format!(
                        "{key}: alias '{alias}' shadows a component key"
                    )));
                }
                if let Some(owner) = aliases.insert(alias.clone(), key.clone()) {
                    return Err(RegistryError::Invalid(format!(
                        "alias '{alias}' is claimed by both '{owner}' and '{key}'"
                    )));
                }
            }
            if key.parse::<ComponentType>().is_err() {
                warn!("Registry component '{key}' has no prop adapter; it can be listed but never selected");
            }
        }

        debug!("Component registry loaded with {} components", components.len());
        Ok(Self {
            components,
            aliases,
        })
    }

    /// Looks up a spec by canonical key or alias.
    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.canonical_key(name)
            .and_then(|key| self.components.get(key))
    }

    pub fn spec(&self, component: ComponentType) -> Option<&ComponentSpec> {
        self.components.get(component.as_str())
    }

    /// Resolves a key or alias to a selectable component type.
    pub fn resolve(&self, name: &str) -> Option<ComponentType> {
        self.canonical_key(name)?.parse().ok()
    }

    /// Canonical component key for a key or alias.
    pub fn canonical_key<'a>(&'a self, name: &'a str) -> Option<&'a str> {
        let name = name.trim();
        if self.components.contains_key(name) {
            Some(name)
        } else {
            self.aliases.get(name).map(String::as_str)
        }
    }

    pub fn import_path(&self, component: ComponentType) -> String {
        self.spec(component)
            .map(|spec| spec.import_path.clone())
            .unwrap_or_else(|| component.default_import_path())
    }

    pub fn named_exports(&self, component: ComponentType) -> Vec<String> {
        self.spec(component)
            .map(|spec| spec.named_exports.clone())
            .unwrap_or_default()
    }

    /// `import { A, B } from "path";` for the generated section file.
    pub fn import_statement(&self, component: ComponentType) -> String {
        let exports = self.named_exports(component);
        let exports = if exports.is_empty() {
            vec![pascal_case(component.as_str())]
        } else {
            exports
        };
        format!(
            "import {{ {} }} from \"{}\";",
            exports.join(", "),
            self.import_path(component)
        )
    }

    /// Whether `count` items fall inside the component's declared bounds.
    pub fn accepts(&self, component: ComponentType, count: usize) -> bool {
        self.spec(component)
            .map(|spec| spec.min_items <= count && count <= spec.max_items)
            .unwrap_or(false)
    }

    pub fn max_items(&self, component: ComponentType) -> Option<usize> {
        self.spec(component).map(|spec| spec.max_items)
    }

    /// Fallback keys reachable from `component`, in order. Stops at cycles.
    pub fn fallback_chain(&self, component: ComponentType) -> Vec<String> {
        let mut chain = Vec::new();
        let mut seen: HashSet<&str> = HashSet::from([component.as_str()]);
        let mut current = self.spec(component).and_then(|s| s.fallback.as_deref());

        while let Some(key) = current {
            if !seen.insert(key) {
                warn!("Fallback cycle detected at '{key}' starting from '{component}'");
                break;
            }
            chain.push(key.to_string());
            current = self.components.get(key).and_then(|s| s.fallback.as_deref());
        }

        chain
    }

    /// Picks the first component along the fallback chain that accepts `count` items.
    ///
    /// When nothing in the chain accepts the count, the last reachable component
    /// wins; an unregistered request degrades to the plain list.
    pub fn resolve_for_count(&self, component: ComponentType, count: usize) -> Resolution {
        if self.accepts(component, count) {
            return Resolution {
                component,
                fell_back_from: None,
            };
        }

        if self.spec(component).is_none() {
            warn!("Component '{component}' is not registered; using simple-list");
            return Resolution {
                component: ComponentType::SimpleList,
                fell_back_from: Some(component),
            };
        }

        let mut last = component;
        for key in self.fallback_chain(component) {
            let Ok(candidate) = key.parse::<ComponentType>() else {
                debug!("Skipping fallback '{key}' with no prop adapter");
                continue;
            };
            last = candidate;
            if self.accepts(candidate, count) {
                return Resolution {
                    component: candidate,
                    fell_back_from: Some(component),
                };
            }
        }

        warn!("No component in the fallback chain of '{component}' accepts {count} items; using '{last}'");
        Resolution {
            component: last,
            fell_back_from: (last != component).then_some(component),
        }
    }

    pub fn entries(&self) -> &BTreeMap<String, ComponentSpec> {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }
}

fn pascal_case(key: &str) -> String {
    key.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
