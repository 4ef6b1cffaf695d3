//! HTTP request handlers for API endpoints.

pub mod aliases;
pub mod health;
pub mod redirect;

pub use aliases::{delete_alias_handler, save_alias_handler};
pub use health::health_handler;
pub use redirect::redirect_handler;
