//! Data types for the ingestion pipeline.

pub mod link;
pub mod metadata;

pub use link::{NewLink, StoredLink};
pub use metadata::{EnrichmentResult, ExtractedMetadata, FetchedDocument, IngestionRequest};
