//! Typed errors for the ingestion library.
//!
//! Uses `thiserror` for library errors (not `anyhow`) to provide
//! strongly-typed, composable error handling.

use thiserror::Error;

/// Errors that can fail an ingestion call.
///
/// A failed ingestion stores nothing: either the fetch aborted the pipeline
/// before anything was assembled, or the final insert failed. Enrichment
/// failures never appear here - they degrade the record instead.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Page fetch failed; the pipeline aborted before extraction.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The persistence collaborator rejected the assembled record.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors from the page fetch step.
///
/// All of these are fatal to the whole ingestion call. There is no retry.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The submitted string is not a parseable absolute URL.
    #[error("invalid URL: {url}")]
    InvalidUrl { url: String },

    /// Transport-level failure (connect, DNS, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The server answered with a non-2xx status.
    #[error("HTTP status {status} fetching {url}")]
    Status { status: u16, url: String },
}

/// Errors from the generative model collaborator.
///
/// These never escape the enrichment engine: each model call converts its
/// own failure into that call's default output.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Transport-level failure talking to the model API.
    #[error("model HTTP error: {0}")]
    Http(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The model API answered with an error payload or status.
    #[error("model API error: {0}")]
    Api(String),

    /// The model answered but produced no usable text.
    #[error("model returned no text")]
    EmptyResponse,
}

/// Storage failure surfaced by a [`LinkStore`](crate::traits::LinkStore)
/// implementation, wrapping the backend's own error.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StorageError(#[from] Box<dyn std::error::Error + Send + Sync>);

impl StorageError {
    /// Wrap a backend error.
    pub fn new(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self(Box::new(source))
    }

    /// Wrap a plain message (for backends without a typed error).
    pub fn message(msg: impl Into<String>) -> Self {
        Self(msg.into().into())
    }
}

/// Result type alias for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Result type alias for fetch operations.
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Result type alias for model operations.
pub type ModelResult<T> = std::result::Result<T, ModelError>;

/// Result type alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StorageError>;
