#![allow(dead_code)]

use axum::Router;
use axum::routing::get;
use linkmap::api::handlers::{health_handler, redirect_handler};
use linkmap::application::services::UrlService;
use linkmap::infrastructure::persistence::InMemoryAliasRepository;
use linkmap::state::AppState;
use linkmap::utils::alias_generator::RandomAliasGenerator;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "https://s.example.com";

/// Builds handler-facing state over the in-memory alias store.
pub fn create_test_state() -> AppState {
    let store = Arc::new(InMemoryAliasRepository::new());
    let generator = Arc::new(RandomAliasGenerator::new());
    let url_service = Arc::new(UrlService::new(store, generator));

    AppState::new(url_service, TEST_BASE_URL.to_string())
}

/// Full application router wired to the given state.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", linkmap::api::routes::routes())
        .with_state(state)
}

/// Seeds a mapping through the service layer.
pub async fn seed_alias(state: &AppState, alias: &str, url: &str) {
    state
        .url_service
        .save(url.to_string(), Some(alias.to_string()))
        .await
        .unwrap();
}
