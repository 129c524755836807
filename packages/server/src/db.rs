//! User account persistence.
//!
//! The `links` table belongs to the pipeline's store; this module owns the
//! `users` table and its queries.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

const USERS_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    email VARCHAR(255) UNIQUE NOT NULL,
    password_hash VARCHAR(255) NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

const LINKS_OWNER_FK: &str = r#"
DO $$
BEGIN
    IF NOT EXISTS (
        SELECT 1 FROM pg_constraint WHERE conname = 'links_owner_id_fkey'
    ) THEN
        ALTER TABLE links
            ADD CONSTRAINT links_owner_id_fkey
            FOREIGN KEY (owner_id) REFERENCES users(id) ON DELETE CASCADE;
    END IF;
END $$
"#;

/// Ensure the users table exists.
pub async fn init(pool: &PgPool) -> sqlx::Result<()> {
    sqlx::query(USERS_SCHEMA).execute(pool).await?;
    Ok(())
}

/// Tie links to their owning account so account deletion cascades.
///
/// The links table is owned by the pipeline's store, which knows nothing
/// about users; the server wires the two together once both tables exist.
pub async fn link_owner_cascade(pool: &PgPool) -> sqlx::Result<()> {
    sqlx::query(LINKS_OWNER_FK).execute(pool).await?;
    Ok(())
}

/// Public user shape - never carries the password hash.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Row used for credential checks only.
#[derive(Debug, FromRow)]
pub struct UserCredentials {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

pub async fn create_user(
    pool: &PgPool,
    email: &str,
    password_hash: &str,
) -> sqlx::Result<User> {
    sqlx::query_as::<_, User>(
        "INSERT INTO users (email, password_hash) VALUES ($1, $2) \
         RETURNING id, email, created_at",
    )
    .bind(email)
    .bind(password_hash)
    .fetch_one(pool)
    .await
}

pub async fn find_by_email(pool: &PgPool, email: &str) -> sqlx::Result<Option<UserCredentials>> {
    sqlx::query_as::<_, UserCredentials>(
        "SELECT id, email, password_hash, created_at FROM users WHERE email = $1",
    )
    .bind(email)
    .fetch_optional(pool)
    .await
}

pub async fn find_by_id(pool: &PgPool, id: Uuid) -> sqlx::Result<Option<User>> {
    sqlx::query_as::<_, User>("SELECT id, email, created_at FROM users WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}
