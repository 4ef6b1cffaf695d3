//! API route configuration.

use crate::api::handlers::{delete_alias_handler, save_alias_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Alias management routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `POST   /aliases`          - Create an alias for a URL
/// - `DELETE /aliases/{alias}`  - Delete an alias
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/aliases", post(save_alias_handler))
        .route("/aliases/{alias}", delete(delete_alias_handler))
}
