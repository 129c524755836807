//! Page fetcher seam.

use async_trait::async_trait;
use url::Url;

use crate::error::FetchResult;
use crate::types::FetchedDocument;

/// Retrieves the raw document for a URL.
///
/// A single GET, body returned as text. Any network error, timeout, or
/// non-2xx status is a [`FetchError`](crate::error::FetchError) and fatal to
/// the whole ingestion call - fetches are never retried. Implementations do
/// no caching and follow redirects only as far as their transport does
/// implicitly.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> FetchResult<FetchedDocument>;
}
