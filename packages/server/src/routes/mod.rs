//! HTTP route handlers.

pub mod auth;
pub mod health;
pub mod links;

pub use auth::{login, me, register};
pub use health::health_handler;
pub use links::{create_link, delete_link, get_link, list_links};
