//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::UrlService;

/// Handler-facing application state.
///
/// Cheap to clone; all fields are shared references.
#[derive(Clone)]
pub struct AppState {
    pub url_service: Arc<UrlService>,
    /// Public base URL used to render full short links, e.g. `https://s.example.com`.
    pub base_url: String,
}

impl AppState {
    pub fn new(url_service: Arc<UrlService>, base_url: String) -> Self {
        Self {
            url_service,
            base_url,
        }
    }

    /// Renders the full short URL for an alias.
    pub fn short_url(&self, alias: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), alias)
    }
}
