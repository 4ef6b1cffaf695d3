//! Alias generation contract.

/// Produces short, unpredictable alias strings.
///
/// Implementations are stateless and safe to call concurrently; every call
/// draws fresh randomness. Collisions with stored aliases are possible and
/// handled by the service retry loop, not here.
#[cfg_attr(test, mockall::automock)]
pub trait AliasGenerator: Send + Sync {
    /// Returns a fixed-length alias built from URL-path-safe characters.
    fn generate(&self) -> String;
}
