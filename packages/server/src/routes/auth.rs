//! Registration, login, and current-user routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::app::AppState;
use crate::auth::AuthUser;
use crate::db::{self, User};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub token: String,
    pub user: User,
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if db::find_by_email(&state.db_pool, &request.email)
        .await?
        .is_some()
    {
        return Err(ApiError::BadRequest("User already exists".to_string()));
    }

    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST)
        .map_err(|e| ApiError::Internal(e.into()))?;

    let user = db::create_user(&state.db_pool, &request.email, &password_hash).await?;
    let token = state
        .jwt
        .create_token(user.id, user.email.clone())
        .map_err(ApiError::Internal)?;

    info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            token,
            user,
        }),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let credentials = db::find_by_email(&state.db_pool, &request.email)
        .await?
        .ok_or(ApiError::Unauthorized("Invalid credentials"))?;

    let valid = bcrypt::verify(&request.password, &credentials.password_hash)
        .map_err(|e| ApiError::Internal(e.into()))?;
    if !valid {
        return Err(ApiError::Unauthorized("Invalid credentials"));
    }

    let token = state
        .jwt
        .create_token(credentials.id, credentials.email.clone())
        .map_err(ApiError::Internal)?;

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        token,
        user: User {
            id: credentials.id,
            email: credentials.email,
            created_at: credentials.created_at,
        },
    }))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let user = db::find_by_id(&state.db_pool, auth.user_id)
        .await?
        .ok_or(ApiError::Forbidden("Invalid token"))?;

    Ok(Json(json!({ "user": user })))
}
