// Main entry point for the Linkstash API server

use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ingestion::{GeminiModel, HttpFetcher, PgLinkStore, Pipeline};
use server_core::{build_app, db, AppState, Config, JwtService};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,ingestion=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Linkstash API");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Connect to database
    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connected");

    // Ensure schema
    db::init(&pool).await.context("Failed to initialize users table")?;
    let store = PgLinkStore::from_pool(pool.clone())
        .await
        .context("Failed to initialize links table")?;
    db::link_owner_cascade(&pool)
        .await
        .context("Failed to link links to users")?;
    tracing::info!("Schema ready");

    // Wire the pipeline
    let model =
        GeminiModel::new(config.gemini_api_key.clone()).with_model(config.gemini_model.clone());
    let pipeline = Pipeline::new(HttpFetcher::new(), model, store.clone());

    let jwt = JwtService::new(&config.jwt_secret, "linkstash".to_string());
    let state = AppState::new(pool, store, pipeline, jwt);
    let app = build_app(state, &config.allowed_origins);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);
    tracing::info!("Health check: http://localhost:{}/api/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
