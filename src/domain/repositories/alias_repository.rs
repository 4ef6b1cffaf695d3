//! Capability traits for alias mapping storage.

use crate::domain::entities::{NewMapping, UrlMapping};
use crate::error::AppError;
use async_trait::async_trait;

/// Write capability: inserts new alias mappings.
///
/// The uniqueness check and the insert must be atomic: two concurrent
/// `create` calls with the same alias yield exactly one success and one
/// [`AppError::AlreadyExists`]. Implementations push the constraint into the
/// storage engine rather than checking before inserting.
#[async_trait]
pub trait AliasCreator: Send + Sync {
    /// Inserts a new mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyExists`] if the alias is already present.
    /// Returns [`AppError::Storage`] on storage failures.
    async fn create(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;
}

/// Read capability: point lookups by alias.
#[async_trait]
pub trait AliasResolver: Send + Sync {
    /// Finds a mapping by its alias.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError>;
}

/// Delete capability: removes alias mappings.
#[async_trait]
pub trait AliasDeleter: Send + Sync {
    /// Deletes a mapping.
    ///
    /// Returns `Ok(true)` if a mapping was removed, `Ok(false)` if none
    /// existed for the alias. The caller decides how to surface the latter;
    /// deletion of an absent alias is not success in this service.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on storage failures.
    async fn delete(&self, alias: &str) -> Result<bool, AppError>;
}

/// Full storage contract for alias mappings.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAliasRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryAliasRepository`] - ephemeral,
///   also the hand-written fake used by integration tests
pub trait AliasStore: AliasCreator + AliasResolver + AliasDeleter {}

impl<T: AliasCreator + AliasResolver + AliasDeleter> AliasStore for T {}

#[cfg(test)]
mockall::mock! {
    /// Mock implementing all three storage capabilities for service tests.
    pub AliasStore {}

    #[async_trait]
    impl AliasCreator for AliasStore {
        async fn create(&self, new_mapping: NewMapping) -> Result<UrlMapping, AppError>;
    }

    #[async_trait]
    impl AliasResolver for AliasStore {
        async fn find_by_alias(&self, alias: &str) -> Result<Option<UrlMapping>, AppError>;
    }

    #[async_trait]
    impl AliasDeleter for AliasStore {
        async fn delete(&self, alias: &str) -> Result<bool, AppError>;
    }
}
