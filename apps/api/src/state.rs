use std::sync::Arc;

use crate::config::Config;
use crate::extraction::ResumeExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Stateless apart from its skill-level policy; cloned into blocking tasks.
    pub extractor: ResumeExtractor,
}

impl AppState {
    pub fn new(config: Config, extractor: ResumeExtractor) -> Self {
        Self {
            config: Arc::new(config),
            extractor,
        }
    }
}
