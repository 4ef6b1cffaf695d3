//! Concrete alias store implementations.
//!
//! - [`PgAliasRepository`] - PostgreSQL, durability via the database
//! - [`InMemoryAliasRepository`] - process-local, for tests and ephemeral runs

pub mod memory_alias_repository;
pub mod pg_alias_repository;

pub use memory_alias_repository::InMemoryAliasRepository;
pub use pg_alias_repository::PgAliasRepository;
