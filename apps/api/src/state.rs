use std::sync::Arc;

use crate::config::Config;
use crate::roadmap::engine::{RoadmapEngine, RuleBasedEngine};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable roadmap engine. Default: RuleBasedEngine.
    pub engine: Arc<dyn RoadmapEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            engine: Arc::new(RuleBasedEngine),
        }
    }
}
