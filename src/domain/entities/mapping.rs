//! Mapping entity representing an alias to URL binding.

use chrono::{DateTime, Utc};

/// A stored alias mapping.
///
/// `alias` is the primary key; at most one mapping exists per alias at any
/// time. `target_url` is stored verbatim and never normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub alias: String,
    pub target_url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(alias: String, target_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            alias,
            target_url,
            created_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone)]
pub struct NewMapping {
    pub alias: String,
    pub target_url: String,
}
