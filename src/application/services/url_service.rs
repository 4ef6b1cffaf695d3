//! Alias mapping service.

use std::sync::Arc;

use crate::domain::AliasGenerator;
use crate::domain::entities::{NewMapping, UrlMapping};
use crate::domain::repositories::AliasStore;
use crate::error::AppError;
use serde_json::json;

/// Facade over the alias store and the alias generator.
///
/// Holds no state of its own beyond the two collaborators, so a single
/// instance is shared across request tasks without locking. The URL is stored
/// verbatim; validation happens at the HTTP boundary before this layer.
pub struct UrlService {
    store: Arc<dyn AliasStore>,
    generator: Arc<dyn AliasGenerator>,
}

impl UrlService {
    /// Creates a new service from its collaborators.
    pub fn new(store: Arc<dyn AliasStore>, generator: Arc<dyn AliasGenerator>) -> Self {
        Self { store, generator }
    }

    /// Stores a mapping and returns it.
    ///
    /// # Alias Selection
    ///
    /// - With `alias`, exactly one create attempt is made. A conflict
    ///   propagates as [`AppError::AlreadyExists`]; retrying here would hand
    ///   the caller a different alias than the one they asked for.
    /// - Without `alias`, a generated alias is tried and regenerated on
    ///   collision, up to 10 attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::AlreadyExists`] for a taken client-chosen alias,
    /// [`AppError::GenerationExhausted`] when the retry budget runs out, and
    /// [`AppError::Storage`] on storage failures.
    pub async fn save(
        &self,
        target_url: String,
        alias: Option<String>,
    ) -> Result<UrlMapping, AppError> {
        match alias {
            Some(alias) => {
                self.store
                    .create(NewMapping {
                        alias,
                        target_url,
                    })
                    .await
            }
            None => self.save_with_generated_alias(target_url).await,
        }
    }

    /// Resolves an alias to its stored mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the alias.
    pub async fn resolve(&self, alias: &str) -> Result<UrlMapping, AppError> {
        self.store.find_by_alias(alias).await?.ok_or_else(|| {
            AppError::not_found("Alias not found", json!({ "alias": alias }))
        })
    }

    /// Deletes the mapping for an alias.
    ///
    /// Deleting an absent alias is an error, not a no-op: callers must be
    /// able to tell "deleted now" from "already gone".
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no mapping exists for the alias.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        let deleted = self.store.delete(alias).await?;

        if !deleted {
            return Err(AppError::not_found(
                "Alias not found",
                json!({ "alias": alias }),
            ));
        }

        Ok(())
    }

    /// Generate-and-create loop with a bounded collision retry.
    ///
    /// Only [`AppError::AlreadyExists`] triggers another attempt; any other
    /// failure stops the loop. The bound is a circuit breaker against a
    /// degenerate generator or a saturated alias space.
    async fn save_with_generated_alias(&self, target_url: String) -> Result<UrlMapping, AppError> {
        const MAX_ATTEMPTS: usize = 10;

        for _ in 0..MAX_ATTEMPTS {
            let alias = self.generator.generate();

            match self
                .store
                .create(NewMapping {
                    alias,
                    target_url: target_url.clone(),
                })
                .await
            {
                Ok(mapping) => return Ok(mapping),
                Err(AppError::AlreadyExists { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        Err(AppError::generation_exhausted(
            "Failed to generate a free alias",
            json!({ "attempts": MAX_ATTEMPTS }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::alias_generator::MockAliasGenerator;
    use crate::domain::repositories::MockAliasStore;
    use chrono::Utc;
    use std::sync::Mutex;

    fn stored(alias: &str, url: &str) -> UrlMapping {
        UrlMapping::new(alias.to_string(), url.to_string(), Utc::now())
    }

    fn conflict() -> AppError {
        AppError::already_exists("Alias already exists", json!({}))
    }

    /// Generator mock that replays a fixed sequence of aliases.
    fn sequence_generator(aliases: Vec<&'static str>) -> MockAliasGenerator {
        let mut generator = MockAliasGenerator::new();
        let position = Mutex::new(0usize);

        generator.expect_generate().returning(move || {
            let mut position = position.lock().unwrap();
            let alias = aliases[*position];
            *position += 1;
            alias.to_string()
        });

        generator
    }

    #[tokio::test]
    async fn test_save_with_custom_alias() {
        let mut store = MockAliasStore::new();
        let mut generator = MockAliasGenerator::new();

        store
            .expect_create()
            .withf(|m| m.alias == "test_alias" && m.target_url == "https://google.com")
            .times(1)
            .returning(|m| Ok(stored(&m.alias, &m.target_url)));

        // A client-chosen alias never consults the generator.
        generator.expect_generate().times(0);

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let mapping = service
            .save(
                "https://google.com".to_string(),
                Some("test_alias".to_string()),
            )
            .await
            .unwrap();

        assert_eq!(mapping.alias, "test_alias");
        assert_eq!(mapping.target_url, "https://google.com");
    }

    #[tokio::test]
    async fn test_save_custom_alias_conflict_is_not_retried() {
        let mut store = MockAliasStore::new();
        let mut generator = MockAliasGenerator::new();

        store
            .expect_create()
            .times(1)
            .returning(|_| Err(conflict()));
        generator.expect_generate().times(0);

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let err = service
            .save(
                "https://example.com".to_string(),
                Some("taken".to_string()),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::AlreadyExists { .. }));
    }

    #[tokio::test]
    async fn test_save_generates_alias_when_absent() {
        let mut store = MockAliasStore::new();
        let generator = sequence_generator(vec!["fresh123"]);

        store
            .expect_create()
            .withf(|m| m.alias == "fresh123")
            .times(1)
            .returning(|m| Ok(stored(&m.alias, &m.target_url)));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let mapping = service
            .save("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(mapping.alias, "fresh123");
    }

    #[tokio::test]
    async fn test_save_retries_generation_on_collision() {
        let mut store = MockAliasStore::new();
        let generator = sequence_generator(vec!["taken1", "taken2", "free1234"]);

        store
            .expect_create()
            .times(3)
            .returning(|m| {
                if m.alias.starts_with("taken") {
                    Err(conflict())
                } else {
                    Ok(stored(&m.alias, &m.target_url))
                }
            });

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let mapping = service
            .save("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(mapping.alias, "free1234");
    }

    #[tokio::test]
    async fn test_save_fails_after_retry_budget() {
        let mut store = MockAliasStore::new();
        let mut generator = MockAliasGenerator::new();

        generator
            .expect_generate()
            .times(10)
            .returning(|| "stuck".to_string());
        store
            .expect_create()
            .times(10)
            .returning(|_| Err(conflict()));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let err = service
            .save("https://example.com".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::GenerationExhausted { .. }));
    }

    #[tokio::test]
    async fn test_save_stops_retrying_on_storage_error() {
        let mut store = MockAliasStore::new();
        let generator = sequence_generator(vec!["anything"]);

        store
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::storage("Storage unavailable", json!({}))));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let err = service
            .save("https://example.com".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Storage { .. }));
    }

    #[tokio::test]
    async fn test_resolve_returns_stored_url() {
        let mut store = MockAliasStore::new();
        let generator = MockAliasGenerator::new();

        store
            .expect_find_by_alias()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| Ok(Some(stored("test_alias", "https://google.com"))));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let mapping = service.resolve("test_alias").await.unwrap();
        assert_eq!(mapping.target_url, "https://google.com");
    }

    #[tokio::test]
    async fn test_resolve_missing_is_not_found() {
        let mut store = MockAliasStore::new();
        let generator = MockAliasGenerator::new();

        store
            .expect_find_by_alias()
            .times(1)
            .returning(|_| Ok(None));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let err = service.resolve("missing").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut store = MockAliasStore::new();
        let generator = MockAliasGenerator::new();

        store
            .expect_delete()
            .withf(|alias| alias == "test_alias")
            .times(1)
            .returning(|_| Ok(true));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        assert!(service.delete("test_alias").await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut store = MockAliasStore::new();
        let generator = MockAliasGenerator::new();

        store.expect_delete().times(1).returning(|_| Ok(false));

        let service = UrlService::new(Arc::new(store), Arc::new(generator));

        let err = service.delete("already-gone").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
