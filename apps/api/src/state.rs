use crate::config::Config;
use crate::recommendation::Recommender;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// `None` when no API key is configured; recommendation requests then fail
    /// with `ConfigurationMissing` without touching the network.
    pub recommender: Option<Recommender>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let recommender = match Recommender::from_config(config) {
            Ok(recommender) => Some(recommender),
            Err(e) => {
                tracing::warn!("{e}; recommendation requests will be rejected");
                None
            }
        };
        Self { recommender }
    }
}
