//! In-memory link store for testing and development.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreResult;
use crate::traits::store::LinkStore;
use crate::types::{NewLink, StoredLink};

/// In-memory storage for link records.
///
/// Useful for tests and development. Not suitable for production as data is
/// lost on restart.
pub struct MemoryStore {
    links: RwLock<HashMap<Uuid, StoredLink>>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            links: RwLock::new(HashMap::new()),
        }
    }

    /// Clear all stored links.
    pub fn clear(&self) {
        self.links.write().unwrap().clear();
    }

    /// Number of stored links across all owners.
    pub fn link_count(&self) -> usize {
        self.links.read().unwrap().len()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn insert(&self, link: NewLink) -> StoreResult<StoredLink> {
        let stored = StoredLink::from_new(link, Uuid::new_v4(), Utc::now());
        self.links
            .write()
            .unwrap()
            .insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<StoredLink>> {
        let mut links: Vec<StoredLink> = self
            .links
            .read()
            .unwrap()
            .values()
            .filter(|link| link.owner_id == owner_id)
            .cloned()
            .collect();
        // Newest first; id as tiebreaker for same-instant inserts.
        links.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(links)
    }

    async fn get_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> StoreResult<Option<StoredLink>> {
        Ok(self
            .links
            .read()
            .unwrap()
            .get(&id)
            .filter(|link| link.owner_id == owner_id)
            .cloned())
    }

    async fn delete_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> StoreResult<bool> {
        let mut links = self.links.write().unwrap();
        match links.get(&id) {
            Some(link) if link.owner_id == owner_id => {
                links.remove(&id);
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
