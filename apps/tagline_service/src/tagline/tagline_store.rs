use anyhow::{Context, Result};
use serde::Serialize;
use sqlx::{FromRow, SqlitePool};

/// A tagline row from the `taglines` table. Rows are append-only: there is
/// no update or delete path anywhere in the service.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TaglineRecord {
    pub id: i64,
    pub product_name: String,
    pub description: String,
    pub audience: String,
    pub tone: String,
    pub tagline: String,
}

/// Input for inserting one generated tagline with its request metadata.
#[derive(Debug, Clone, Copy)]
pub struct NewTagline<'a> {
    pub product_name: &'a str,
    pub description: &'a str,
    pub audience: &'a str,
    pub tone: &'a str,
    pub tagline: &'a str,
}

#[derive(Clone)]
pub struct TaglineStore {
    pool: SqlitePool,
}

impl TaglineStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Creates the `taglines` table if missing. Safe to call on every start.
    pub async fn initialize(&self) -> Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS taglines (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                product_name TEXT NOT NULL,
                description TEXT NOT NULL,
                audience TEXT NOT NULL,
                tone TEXT NOT NULL,
                tagline TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await
        .context("Failed to create taglines table")?;

        Ok(())
    }

    pub async fn insert(&self, record: NewTagline<'_>) -> Result<()> {
        sqlx::query(
            "INSERT INTO taglines (product_name, description, audience, tone, tagline)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(record.product_name)
        .bind(record.description)
        .bind(record.audience)
        .bind(record.tone)
        .bind(record.tagline)
        .execute(&self.pool)
        .await
        .context("Failed to insert tagline")?;

        Ok(())
    }

    /// Every stored tagline, most recently inserted first.
    pub async fn list_all(&self) -> Result<Vec<TaglineRecord>> {
        sqlx::query_as::<_, TaglineRecord>(
            "SELECT id, product_name, description, audience, tone, tagline
             FROM taglines
             ORDER BY id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to read tagline history")
    }
}
