//! Link Ingestion & Enrichment Pipeline
//!
//! Turns a submitted URL into a persisted, enriched bookmark: title,
//! description, preview image, domain, closed-taxonomy tags, and a short
//! generated summary.
//!
//! # Design
//!
//! One sequential pipeline per call: fetch → extract → enrich → persist.
//! Fetch failures abort the whole call; enrichment is best-effort and can
//! only degrade the record, never fail it. The tag taxonomy is closed - the
//! model cannot introduce arbitrary tags into storage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ingestion::{HttpFetcher, MemoryStore, Pipeline};
//! use ingestion::models::GeminiModel;
//!
//! let pipeline = Pipeline::new(
//!     HttpFetcher::new(),
//!     GeminiModel::from_env()?,
//!     MemoryStore::new(),
//! );
//! let link = pipeline.ingest("https://example.com/article", owner_id).await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Collaborator seams (PageFetcher, TextModel, LinkStore)
//! - [`types`] - Pipeline data types
//! - [`pipeline`] - Orchestrator and enrichment engine
//! - [`metadata`] - Metadata extraction with fallback chains
//! - [`taxonomy`] - The closed tag set
//! - [`fetchers`] - HTTP fetcher implementation
//! - [`models`] - Gemini model client
//! - [`stores`] - Storage implementations (memory, Postgres)
//! - [`testing`] - Mock implementations for testing

pub mod error;
pub mod fetchers;
pub mod metadata;
pub mod models;
pub mod pipeline;
pub mod stores;
pub mod taxonomy;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use error::{FetchError, IngestError, ModelError, StorageError};
pub use metadata::extract_metadata;
pub use pipeline::{enrich, Pipeline};
pub use taxonomy::{parse_tag_list, Tag, ALL_TAGS};
pub use traits::{LinkStore, PageFetcher, TextModel};
pub use types::{
    EnrichmentResult, ExtractedMetadata, FetchedDocument, IngestionRequest, NewLink, StoredLink,
};

// Re-export implementations
pub use fetchers::HttpFetcher;
pub use models::GeminiModel;
pub use stores::MemoryStore;

#[cfg(feature = "postgres")]
pub use stores::PgLinkStore;

// Re-export testing utilities
pub use testing::{MockFetcher, MockModel};
