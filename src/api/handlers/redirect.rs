//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Issues a `307 Temporary Redirect` so the mapping can be deleted and
/// recreated with a different target without clients caching the old one.
///
/// # Errors
///
/// Returns 404 Not Found if the alias has no mapping.
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let mapping = state.url_service.resolve(&alias).await?;

    debug!(alias = %alias, target = %mapping.target_url, "redirecting");

    Ok(Redirect::temporary(&mapping.target_url))
}
