//! Explicit request validation.
//!
//! Validation is plain functions returning field-level errors, decoupled from
//! the serialization layer. The accepted URL is stored verbatim afterwards;
//! parsing here only proves it is a well-formed absolute http(s) URL.

use crate::error::AppError;
use serde::Serialize;
use serde_json::json;
use url::Url;

/// Minimum accepted length for a client-chosen alias.
const ALIAS_MIN_LENGTH: usize = 3;

/// Maximum accepted length for a client-chosen alias.
const ALIAS_MAX_LENGTH: usize = 32;

/// Aliases that collide with service routes and cannot be claimed.
const RESERVED_ALIASES: &[&str] = &["api", "health"];

/// A single field-level validation failure.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validates the create-alias request fields.
///
/// Collects all failures instead of stopping at the first, so clients see
/// every problem in one round trip.
///
/// # Errors
///
/// Returns [`AppError::Validation`] with a `fields` list in the details.
pub fn validate_save_request(url: &str, alias: Option<&str>) -> Result<(), AppError> {
    let mut errors = Vec::new();

    errors.extend(check_url(url));

    if let Some(alias) = alias {
        errors.extend(check_alias(alias));
    }

    into_result(errors)
}

/// Validates a client-chosen alias on its own.
pub fn validate_alias(alias: &str) -> Result<(), AppError> {
    into_result(check_alias(alias))
}

fn into_result(errors: Vec<FieldError>) -> Result<(), AppError> {
    if errors.is_empty() {
        return Ok(());
    }

    Err(AppError::bad_request(
        "Invalid request",
        json!({ "fields": errors }),
    ))
}

fn check_url(url: &str) -> Vec<FieldError> {
    if url.is_empty() {
        return vec![FieldError::new("url", "url is required")];
    }

    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            return vec![FieldError::new("url", format!("url is not valid: {}", e))];
        }
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return vec![FieldError::new("url", "url must use http or https")];
    }

    if parsed.host_str().is_none() {
        return vec![FieldError::new("url", "url must have a host")];
    }

    Vec::new()
}

fn check_alias(alias: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if alias.len() < ALIAS_MIN_LENGTH || alias.len() > ALIAS_MAX_LENGTH {
        errors.push(FieldError::new(
            "alias",
            format!(
                "alias must be {}-{} characters",
                ALIAS_MIN_LENGTH, ALIAS_MAX_LENGTH
            ),
        ));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        errors.push(FieldError::new(
            "alias",
            "alias can only contain letters, digits, hyphens, and underscores",
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        errors.push(FieldError::new("alias", "this alias is reserved"));
    }

    errors
}
