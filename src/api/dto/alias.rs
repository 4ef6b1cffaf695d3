//! DTOs for alias management endpoints.

use serde::{Deserialize, Serialize};

/// Request to create an alias for a URL.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// The URL the alias will redirect to. Stored verbatim.
    pub url: String,

    /// Optional client-chosen alias. Generated when absent.
    pub alias: Option<String>,
}

/// Response returned after an alias is created.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub alias: String,
    pub short_url: String,
}

/// Response confirming an alias was deleted.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub alias: String,
}
