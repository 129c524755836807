//! PostgreSQL link store.
//!
//! Production storage backend. Tags are stored as their exact taxonomy
//! strings in a `TEXT[]` column; values outside the taxonomy are already
//! filtered upstream, and any stray value found on read is dropped rather
//! than failing the query.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;
use tracing::debug;
use uuid::Uuid;

use crate::error::{StorageError, StoreResult};
use crate::taxonomy::Tag;
use crate::traits::store::LinkStore;
use crate::types::{NewLink, StoredLink};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS links (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    owner_id UUID NOT NULL,
    url TEXT NOT NULL,
    title TEXT NOT NULL DEFAULT '',
    description TEXT NOT NULL DEFAULT '',
    image_url TEXT NOT NULL DEFAULT '',
    domain VARCHAR(255) NOT NULL DEFAULT '',
    tags TEXT[] NOT NULL DEFAULT '{}',
    summary TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);
CREATE INDEX IF NOT EXISTS idx_links_owner_created
    ON links (owner_id, created_at DESC);
"#;

const COLUMNS: &str =
    "id, owner_id, url, title, description, image_url, domain, tags, summary, created_at";

/// PostgreSQL-backed link store.
#[derive(Clone)]
pub struct PgLinkStore {
    pool: PgPool,
}

impl PgLinkStore {
    /// Connect to the given database URL and ensure the schema exists.
    pub async fn new(database_url: &str) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .map_err(StorageError::new)?;
        Self::from_pool(pool).await
    }

    /// Build a store from an existing pool (e.g. the server's) and ensure
    /// the schema exists.
    pub async fn from_pool(pool: PgPool) -> StoreResult<Self> {
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// The underlying pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn ensure_schema(&self) -> StoreResult<()> {
        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(StorageError::new)?;
        }
        debug!("links schema ready");
        Ok(())
    }
}

/// Raw row shape; tags come back as plain strings.
#[derive(FromRow)]
struct LinkRow {
    id: Uuid,
    owner_id: Uuid,
    url: String,
    title: String,
    description: String,
    image_url: String,
    domain: String,
    tags: Vec<String>,
    summary: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<LinkRow> for StoredLink {
    fn from(row: LinkRow) -> Self {
        StoredLink {
            id: row.id,
            owner_id: row.owner_id,
            url: row.url,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            domain: row.domain,
            tags: row
                .tags
                .iter()
                .filter_map(|tag| tag.parse::<Tag>().ok())
                .collect(),
            summary: row.summary,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl LinkStore for PgLinkStore {
    async fn insert(&self, link: NewLink) -> StoreResult<StoredLink> {
        let tags: Vec<String> = link.tags.iter().map(|tag| tag.to_string()).collect();

        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "INSERT INTO links (owner_id, url, title, description, image_url, domain, tags, summary) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {COLUMNS}"
        ))
        .bind(link.owner_id)
        .bind(&link.url)
        .bind(&link.title)
        .bind(&link.description)
        .bind(&link.image_url)
        .bind(&link.domain)
        .bind(&tags)
        .bind(&link.summary)
        .fetch_one(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(row.into())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> StoreResult<Vec<StoredLink>> {
        let rows = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {COLUMNS} FROM links WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(owner_id)
        .fetch_all(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_by_id_and_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> StoreResult<Option<StoredLink>> {
        let row = sqlx::query_as::<_, LinkRow>(&format!(
            "SELECT {COLUMNS} FROM links WHERE id = $1 AND owner_id = $2"
        ))
        .bind(id)
        .bind(owner_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(StorageError::new)?;

        Ok(row.map(Into::into))
    }

    async fn delete_by_id_and_owner(&self, id: Uuid, owner_id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM links WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .execute(&self.pool)
            .await
            .map_err(StorageError::new)?;

        Ok(result.rows_affected() > 0)
    }
}
