use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::JsonModel;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Capability interface for JSON-mode model calls. Production wires in
    /// `LlmClient`; tests inject deterministic mocks.
    pub llm: Arc<dyn JsonModel>,
    pub config: Config,
}
