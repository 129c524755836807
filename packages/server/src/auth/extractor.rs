//! Authenticated-user extractor.
//!
//! Extracts the bearer token from the Authorization header, verifies it,
//! and confirms the user row still exists. Missing credentials reject with
//! 401, bad credentials with 403; protected handlers simply take an
//! `AuthUser` argument.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use crate::app::AppState;
use crate::db;
use crate::error::ApiError;

/// The authenticated caller of a protected route.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: uuid::Uuid,
    pub email: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized("Access token required"))?;

        let token = header.strip_prefix("Bearer ").unwrap_or(header);

        let claims = state
            .jwt
            .verify_token(token)
            .map_err(|_| ApiError::Forbidden("Invalid token"))?;

        // Token may outlive the account; re-check the row.
        let user = db::find_by_id(&state.db_pool, claims.user_id)
            .await?
            .ok_or(ApiError::Forbidden("Invalid token"))?;

        Ok(AuthUser {
            user_id: user.id,
            email: user.email,
        })
    }
}
