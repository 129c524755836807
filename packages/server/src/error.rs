//! API error type and response mapping.
//!
//! Every handler error becomes a JSON `{"message": …}` body. Internal
//! detail is logged for operators and never leaked to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 400 with a caller-facing message.
    #[error("{0}")]
    BadRequest(String),

    /// 401 - missing or unusable credentials.
    #[error("{0}")]
    Unauthorized(&'static str),

    /// 403 - credentials present but rejected.
    #[error("{0}")]
    Forbidden(&'static str),

    /// 404 with a caller-facing message.
    #[error("{0}")]
    NotFound(&'static str),

    /// 502 - the submitted URL could not be fetched.
    #[error("{0}")]
    BadGateway(&'static str),

    /// 500 - anything else; detail stays in the logs.
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(ref source) = self {
            error!(error = %source, "request failed");
        }
        (self.status(), Json(json!({ "message": self.message() }))).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> Self {
        ApiError::Internal(error.into())
    }
}

impl From<ingestion::StorageError> for ApiError {
    fn from(error: ingestion::StorageError) -> Self {
        ApiError::Internal(error.into())
    }
}
