//! Repository trait definitions for the domain layer.
//!
//! Data access is expressed as narrow capability traits following the
//! Repository pattern: handlers and services depend on the capabilities they
//! need, and concrete backends live in `crate::infrastructure::persistence`.
//!
//! # Available Traits
//!
//! - [`AliasCreator`] - Insert new alias mappings (atomic uniqueness)
//! - [`AliasResolver`] - Point lookup by alias
//! - [`AliasDeleter`] - Remove a mapping
//! - [`AliasStore`] - All three combined, for full-service consumers
//!
//! # Testing
//!
//! A combined `MockAliasStore` is available with `cfg(test)`; integration
//! tests use the in-memory backend instead.

pub mod alias_repository;

pub use alias_repository::{AliasCreator, AliasDeleter, AliasResolver, AliasStore};

#[cfg(test)]
pub use alias_repository::MockAliasStore;
