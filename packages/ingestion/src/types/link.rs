//! Link records - the assembled output of the pipeline and its stored form.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::taxonomy::Tag;
use crate::types::metadata::{EnrichmentResult, ExtractedMetadata};

/// A fully assembled link record, ready for insertion.
///
/// Union of the extracted metadata, the enrichment result, and the caller's
/// identity. Identity fields (`id`, `created_at`) are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLink {
    pub url: String,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub domain: String,
    pub tags: BTreeSet<Tag>,
    pub summary: String,
}

impl NewLink {
    /// Assemble a record from the pipeline's parts.
    pub fn assemble(
        url: impl Into<String>,
        owner_id: Uuid,
        metadata: ExtractedMetadata,
        enrichment: EnrichmentResult,
    ) -> Self {
        Self {
            url: url.into(),
            owner_id,
            title: metadata.title,
            description: metadata.description,
            image_url: metadata.image_url,
            domain: metadata.domain,
            tags: enrichment.tags,
            summary: enrichment.summary,
        }
    }
}

/// A persisted link record.
///
/// Immutable after insertion; the only mutation that exists is deletion.
/// Owned by exactly one user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLink {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub url: String,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub domain: String,
    pub tags: BTreeSet<Tag>,
    pub summary: String,
    pub created_at: DateTime<Utc>,
}

impl StoredLink {
    /// Build the stored form of a new link with identity assigned.
    pub fn from_new(link: NewLink, id: Uuid, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            owner_id: link.owner_id,
            url: link.url,
            title: link.title,
            description: link.description,
            image_url: link.image_url,
            domain: link.domain,
            tags: link.tags,
            summary: link.summary,
            created_at,
        }
    }
}
