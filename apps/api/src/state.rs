use crate::config::Config;

/// Shared application state injected into all route handlers via Axum
/// extractors. The extraction pipeline itself is stateless; this only
/// carries process configuration and the download client.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration. Consumed by `main` for the listener and CORS;
    /// kept here for handlers that grow config knobs later.
    #[allow(dead_code)]
    pub config: Config,
    pub http: reqwest::Client,
}
