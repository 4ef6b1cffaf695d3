//! Utility functions for alias generation and request validation.
//!
//! - [`alias_generator`] - Random alias generation
//! - [`validate`] - Explicit field-level request validation
//! - [`db_error`] - sqlx error classification helpers

pub mod alias_generator;
pub mod db_error;
pub mod validate;
