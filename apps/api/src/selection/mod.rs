//! Component selection: archetype detection, richness scoring, layout hints,
//! pluggable ranking strategies and the unified selector tying them together.

pub mod archetype;
pub mod layout;
pub mod richness;
pub mod rules;
pub mod smart;
pub mod strategy;
pub mod unified;

pub use strategy::SelectorStrategy;
pub use unified::{PlanOptions, UnifiedSelector};
