//! Application layer services implementing business logic.
//!
//! Orchestrates domain operations by coordinating storage calls and the
//! alias-collision retry policy. Services consume domain traits and provide
//! a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::url_service::UrlService`] - Alias creation, resolution, deletion

pub mod services;
