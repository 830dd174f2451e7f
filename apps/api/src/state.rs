use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only: every request builds its worksheet from scratch.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Config,
}
