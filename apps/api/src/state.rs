use crate::config::Config;
use crate::editor::Coordinator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The single in-memory editing session. Owns the document and its peer state.
    pub editor: Coordinator,
    pub config: Config,
}
