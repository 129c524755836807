//! Linkstash HTTP API.
//!
//! Auth (register/login/me), link CRUD backed by the ingestion pipeline,
//! and a health check. The pipeline itself lives in the `ingestion` crate;
//! this crate is routing, auth, and glue.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod routes;

pub use app::{build_app, AppPipeline, AppState};
pub use auth::{AuthUser, JwtService};
pub use config::Config;
pub use error::ApiError;
