//! Generative model seam.

use async_trait::async_trait;

use crate::error::ModelResult;

/// A generative text model: one prompt in, one text response out.
///
/// No streaming, no conversation state. The enrichment engine treats every
/// error from this trait as recoverable - a failed call degrades its own
/// output and nothing else.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> ModelResult<String>;
}
