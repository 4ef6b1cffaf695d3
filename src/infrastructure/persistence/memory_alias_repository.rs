//! In-memory implementation of the alias store.
//!
//! Backs the `memory` storage backend and the integration test suite. State
//! lives for the lifetime of the process only.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::{AliasCreator, AliasDeleter, AliasResolver};
use crate::error::AppError;

/// Alias store backed by a `RwLock<HashMap>`.
///
/// The write lock makes the uniqueness check and the insert a single atomic
/// step, matching the database-backed contract: concurrent creates of the
/// same alias yield exactly one success.
#[derive(Debug, Default)]
pub struct InMemoryAliasRepository {
    mappings: RwLock<HashMap<String, UrlMapping>>,
}

impl InMemoryAliasRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.mappings.read().expect("alias map poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AliasCreator for InMemoryAliasRepository {
    async fn create(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError> {
        let mut mappings = self.mappings.write().expect("alias map poisoned");

        if mappings.contains_key(&new_mapping.alias) {
            return Err(AppError::already_exists(
                "Alias already exists",
                json!({ "alias": new_mapping.alias }),
            ));
        }

        let mapping = UrlMapping::new(new_mapping.alias.clone(), new_mapping.target_url, Utc::now());
        mappings.insert(new_mapping.alias, mapping.clone());

        Ok(mapping)
    }
}

#[async_trait]
impl AliasResolver for InMemoryAliasRepository {
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError> {
        let mappings = self.mappings.read().expect("alias map poisoned");

        Ok(mappings.get(alias).cloned())
    }
}

#[async_trait]
impl AliasDeleter for InMemoryAliasRepository {
    async fn delete(&self, alias: &str) -> Result<bool, AppError> {
        let mut mappings = self.mappings.write().expect("alias map poisoned");

        Ok(mappings.remove(alias).is_some())
    }
}
