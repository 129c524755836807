//! Persistence seam for link records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::types::{NewLink, StoredLink};

/// Stores link records, scoped to their owning account.
///
/// The pipeline itself only uses [`insert`](LinkStore::insert); the other
/// operations serve the surrounding CRUD layer. Records are immutable after
/// insertion - there is deliberately no update operation.
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Persist an assembled link, assigning `id` and `created_at`.
    async fn insert(&self, link: NewLink) -> StoreResult<StoredLink>;

    /// All links owned by an account, newest first.
    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<StoredLink>>;

    /// A single link, only if it belongs to the given owner.
    async fn get_by_id_and_owner(&self, id: Uuid, owner_id: Uuid)
        -> StoreResult<Option<StoredLink>>;

    /// Delete a link if it belongs to the given owner. Returns whether a
    /// record was removed.
    async fn delete_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> StoreResult<bool>;
}
