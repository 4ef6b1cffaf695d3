//! Handlers for alias management endpoints (create, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::info;

use crate::api::dto::alias::{DeleteResponse, SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::validate_save_request;

/// Creates an alias for a URL.
///
/// # Endpoint
///
/// `POST /api/aliases`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "alias": "my-alias"   // optional; generated when absent
/// }
/// ```
///
/// # Response
///
/// `201 Created` with the alias that was stored:
///
/// ```json
/// { "alias": "my-alias", "short_url": "https://s.example.com/my-alias" }
/// ```
///
/// # Errors
///
/// - `400` when the URL or alias fails validation
/// - `409` when a client-chosen alias is already taken
/// - `500` when alias generation exhausts its retry budget or storage fails
pub async fn save_alias_handler(
    State(state): State<AppState>,
    Json(payload): Json<SaveRequest>,
) -> Result<(StatusCode, Json<SaveResponse>), AppError> {
    validate_save_request(&payload.url, payload.alias.as_deref())?;

    let mapping = state.url_service.save(payload.url, payload.alias).await?;

    info!(alias = %mapping.alias, "alias created");

    let short_url = state.short_url(&mapping.alias);

    Ok((
        StatusCode::CREATED,
        Json(SaveResponse {
            alias: mapping.alias,
            short_url,
        }),
    ))
}

/// Deletes an alias.
///
/// # Endpoint
///
/// `DELETE /api/aliases/{alias}`
///
/// # Behavior
///
/// The mapping is removed outright and the alias becomes available for
/// reuse. Deleting an alias that does not exist returns `404`, not success;
/// callers can rely on a `200` meaning the mapping existed until this call.
///
/// # Response
///
/// `200 OK` with `{ "alias": "my-alias" }` confirming removal.
pub async fn delete_alias_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DeleteResponse>, AppError> {
    state.url_service.delete(&alias).await?;

    info!(alias = %alias, "alias deleted");

    Ok(Json(DeleteResponse { alias }))
}
