//! Core business data structures.

pub mod mapping;

pub use mapping::{NewMapping, UrlMapping};
