use std::sync::Arc;

use crate::config::Config;
use crate::scoring::ats::AtsScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable scorer. Default: LexicalAtsScorer over the configured taxonomy.
    pub scorer: Arc<dyn AtsScorer>,
}
