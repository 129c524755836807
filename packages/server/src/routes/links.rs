//! Link routes: ingest, list, get, delete.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use serde_json::json;
use tracing::warn;
use uuid::Uuid;

use ingestion::{IngestError, LinkStore};

use crate::app::AppState;
use crate::auth::AuthUser;
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateLinkRequest {
    pub url: String,
}

/// POST /api/links - run the ingestion pipeline for a submitted URL.
pub async fn create_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let link = state
        .pipeline
        .ingest(&request.url, auth.user_id)
        .await
        .map_err(|error| match error {
            IngestError::Fetch(fetch_error) => {
                warn!(url = %request.url, error = %fetch_error, "link fetch failed");
                ApiError::BadGateway("Failed to fetch the submitted URL")
            }
            IngestError::Storage(storage_error) => ApiError::Internal(storage_error.into()),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Link saved successfully",
            "link": link,
        })),
    ))
}

/// GET /api/links - the caller's links, newest first.
pub async fn list_links(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let links = state.store.list_by_owner(auth.user_id).await?;
    Ok(Json(json!({ "links": links })))
}

/// GET /api/links/:id
pub async fn get_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let link = state
        .store
        .get_by_id_and_owner(id, auth.user_id)
        .await?
        .ok_or(ApiError::NotFound("Link not found"))?;

    Ok(Json(json!({ "link": link })))
}

/// DELETE /api/links/:id
pub async fn delete_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = state.store.delete_by_id_and_owner(id, auth.user_id).await?;
    if !deleted {
        return Err(ApiError::NotFound("Link not found"));
    }

    Ok(Json(json!({ "message": "Link deleted successfully" })))
}
