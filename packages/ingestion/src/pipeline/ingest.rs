//! Ingestion orchestrator.
//!
//! Sequences fetch → extract → enrich → persist for one submitted URL.
//! Fetch and persistence failures abort the call; enrichment failures
//! degrade the record and nothing else. Callers either get a complete
//! stored record (possibly with empty tags/summary) or an error - there is
//! no partial-success state.

use tracing::{info, instrument};
use url::Url;
use uuid::Uuid;

use crate::error::{FetchError, Result};
use crate::metadata::extract_metadata;
use crate::pipeline::enrich::enrich;
use crate::traits::{LinkStore, PageFetcher, TextModel};
use crate::types::{IngestionRequest, NewLink, StoredLink};

/// The ingestion pipeline, parameterized over its collaborators.
///
/// Holds no mutable state; concurrent `ingest` calls are independent.
/// Two concurrent submissions of the same URL produce two records - the
/// pipeline does not dedupe.
///
/// # Example
///
/// ```rust,ignore
/// use ingestion::{HttpFetcher, MemoryStore, Pipeline};
/// use ingestion::models::GeminiModel;
///
/// let pipeline = Pipeline::new(HttpFetcher::new(), GeminiModel::from_env()?, MemoryStore::new());
/// let link = pipeline.ingest("https://example.com/article", owner_id).await?;
/// ```
#[derive(Clone)]
pub struct Pipeline<F, M, S> {
    fetcher: F,
    model: M,
    store: S,
}

impl<F, M, S> Pipeline<F, M, S>
where
    F: PageFetcher,
    M: TextModel,
    S: LinkStore,
{
    /// Create a pipeline from its collaborators.
    pub fn new(fetcher: F, model: M, store: S) -> Self {
        Self {
            fetcher,
            model,
            store,
        }
    }

    /// The underlying store, for the surrounding CRUD layer.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Turn a submitted URL into a persisted, enriched link.
    ///
    /// Steps:
    /// 1. Parse the URL (failure surfaces as a fetch error).
    /// 2. Fetch the document - any failure aborts, nothing is stored.
    /// 3. Extract metadata (infallible).
    /// 4. Enrich, best-effort.
    /// 5. Insert and return the stored record.
    pub async fn ingest(&self, url: &str, owner_id: Uuid) -> Result<StoredLink> {
        self.run(IngestionRequest::new(url, owner_id)).await
    }

    #[instrument(skip(self, request), fields(url = %request.url, owner = %request.owner_id))]
    async fn run(&self, request: IngestionRequest) -> Result<StoredLink> {
        let parsed = Url::parse(&request.url).map_err(|_| FetchError::InvalidUrl {
            url: request.url.clone(),
        })?;

        let document = self.fetcher.fetch(&parsed).await?;

        let metadata = extract_metadata(&document.raw_html, &document.source_url);

        let enrichment = enrich(&metadata, parsed.as_str(), &self.model).await;

        let link = NewLink::assemble(request.url, request.owner_id, metadata, enrichment);
        let stored = self.store.insert(link).await?;

        info!(id = %stored.id, domain = %stored.domain, tags = stored.tags.len(), "link ingested");
        Ok(stored)
    }
}
