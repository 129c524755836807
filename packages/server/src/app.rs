//! Application state and router setup.

use std::sync::Arc;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use ingestion::{GeminiModel, HttpFetcher, PgLinkStore, Pipeline};

use crate::auth::JwtService;
use crate::routes::{
    create_link, delete_link, get_link, health_handler, list_links, login, me, register,
};

/// The concrete pipeline wired into the server.
pub type AppPipeline = Pipeline<HttpFetcher, GeminiModel, PgLinkStore>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub store: PgLinkStore,
    pub pipeline: Arc<AppPipeline>,
    pub jwt: Arc<JwtService>,
}

impl AppState {
    pub fn new(
        db_pool: PgPool,
        store: PgLinkStore,
        pipeline: AppPipeline,
        jwt: JwtService,
    ) -> Self {
        Self {
            db_pool,
            store,
            pipeline: Arc::new(pipeline),
            jwt: Arc::new(jwt),
        }
    }
}

/// Build the application router.
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
        .route("/api/links", post(create_link).get(list_links))
        .route("/api/links/:id", get(get_link).delete(delete_link))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
