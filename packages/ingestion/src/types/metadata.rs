//! Transient pipeline types - requests, fetched documents, extracted fields.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use crate::taxonomy::Tag;

/// A single ingestion request. Created per call, consumed immediately.
#[derive(Debug, Clone)]
pub struct IngestionRequest {
    /// The submitted URL, exactly as received.
    pub url: String,

    /// The authenticated owner of the resulting record. Supplied by the
    /// auth collaborator and trusted as-is.
    pub owner_id: Uuid,
}

impl IngestionRequest {
    pub fn new(url: impl Into<String>, owner_id: Uuid) -> Self {
        Self {
            url: url.into(),
            owner_id,
        }
    }
}

/// The raw document retrieved for a URL.
///
/// Owned exclusively by one pipeline invocation and discarded after
/// extraction. The body is passed through untouched - possibly not HTML at
/// all, in which case extraction simply yields defaults.
#[derive(Debug, Clone)]
pub struct FetchedDocument {
    /// Response body as text.
    pub raw_html: String,

    /// The URL the document was requested from.
    pub source_url: Url,
}

/// Descriptive fields extracted from a fetched document.
///
/// `domain` is always derived from the request URL's host, never from page
/// content, so a page cannot spoof its origin via meta tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedMetadata {
    /// Page title; `"Untitled"` when no source yields a value.
    pub title: String,

    /// Meta description; empty when absent.
    pub description: String,

    /// Preview image URL from `og:image`; empty when absent.
    pub image_url: String,

    /// Host component of the request URL.
    pub domain: String,
}

/// Best-effort AI enrichment of a link.
///
/// Every tag is a taxonomy member by construction. An empty summary is a
/// valid terminal state (enrichment skipped or failed), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrichmentResult {
    pub tags: BTreeSet<Tag>,
    pub summary: String,
}

impl EnrichmentResult {
    /// The degraded result used when enrichment produced nothing.
    pub fn empty() -> Self {
        Self::default()
    }
}
