use std::sync::Arc;

use crate::config::Config;
use crate::generator::PortfolioGenerator;
use crate::registry::ComponentRegistry;
use crate::selection::UnifiedSelector;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub registry: Arc<ComponentRegistry>,
    /// Wraps the configured `ComponentSelector` strategy. Swap via SELECTOR_STRATEGY.
    pub selector: Arc<UnifiedSelector>,
    pub generator: Arc<PortfolioGenerator>,
}

impl AppState {
    /// Wires the pipeline around one shared registry.
    pub fn new(config: Config, registry: ComponentRegistry) -> Self {
        let registry = Arc::new(registry);
        let selector = UnifiedSelector::new(registry.clone(), config.selector_strategy.build());
        let generator = PortfolioGenerator::new(registry.clone());

        Self {
            config,
            registry,
            selector: Arc::new(selector),
            generator: Arc::new(generator),
        }
    }
}
