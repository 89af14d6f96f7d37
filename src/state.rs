use std::sync::Arc;

use crate::config::AppConfig;
use crate::quote::{PricingScriptGenerator, QuoteGenerator};

/// Shared application state handed to every handler.
pub struct AppState {
    pub config: AppConfig,
    pub generator: Arc<dyn QuoteGenerator + Send + Sync>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let generator = Arc::new(PricingScriptGenerator::from_config(&config));
        Self { config, generator }
    }

    /// State with a caller-supplied generator, used by tests to stub out the
    /// external process.
    pub fn with_generator(
        config: AppConfig,
        generator: Arc<dyn QuoteGenerator + Send + Sync>,
    ) -> Self {
        Self { config, generator }
    }
}
