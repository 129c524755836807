//! Health check endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// GET /api/health
///
/// Returns 200 OK when the database answers, 503 otherwise.
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let db_check = tokio::time::timeout(
        std::time::Duration::from_secs(5),
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let (status_code, status, error) = match db_check {
        Ok(Ok(_)) => (StatusCode::OK, "OK", None),
        Ok(Err(e)) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "unhealthy",
            Some(format!("database query failed: {e}")),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            "unhealthy",
            Some("database query timeout (>5s)".to_string()),
        ),
    };

    (
        status_code,
        Json(HealthResponse {
            status: status.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            error,
        }),
    )
}
