//! # storage-adapters
//!
//! This module implements the data mapping between the SQLite relational
//! model and the `domains` message model. The store owns identity
//! assignment: ids are UUID v7, so insertion order and id order agree.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domains::{Message, MessageRepo, NewMessage};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use uuid::Uuid;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS messages (
    id          BLOB PRIMARY KEY,
    text        TEXT NOT NULL,
    sender_name TEXT NOT NULL,
    sender_ip   TEXT NOT NULL,
    created_at  TEXT NOT NULL,
    expires_at  TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_messages_sender_ip ON messages (sender_ip, created_at);
CREATE INDEX IF NOT EXISTS idx_messages_expires_at ON messages (expires_at);
";

pub struct SqliteMessageRepo {
    pool: SqlitePool,
}

// Helpers for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> Uuid {
    Uuid::from_slice(blob).unwrap_or_default()
}

fn row_to_message(row: SqliteRow) -> Message {
    Message {
        id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
        text: row.get("text"),
        sender_name: row.get("sender_name"),
        sender_ip: row.get("sender_ip"),
        created_at: row.get("created_at"),
        expires_at: row.get("expires_at"),
    }
}

impl SqliteMessageRepo {
    /// Connects to the given SQLite database and ensures the schema exists.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new().max_connections(5).connect(url).await?;
        Self::init_schema(&pool).await?;
        Ok(Self { pool })
    }

    /// A private in-memory database on a single connection. Used by tests;
    /// more than one connection would each see their own empty database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        Self::init_schema(&pool).await?;
        Ok(Self { pool })
    }

    async fn init_schema(pool: &SqlitePool) -> anyhow::Result<()> {
        sqlx::raw_sql(SCHEMA).execute(pool).await?;
        tracing::debug!("messages schema ready");
        Ok(())
    }
}

#[async_trait]
impl MessageRepo for SqliteMessageRepo {
    /// Inserts with a store-assigned UUID v7 id; timestamps are stored
    /// verbatim from the insertion request.
    async fn insert(&self, new: NewMessage) -> anyhow::Result<Message> {
        let id = Uuid::now_v7();
        sqlx::query(
            "INSERT INTO messages (id, text, sender_name, sender_ip, created_at, expires_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(id))
        .bind(&new.text)
        .bind(&new.sender_name)
        .bind(&new.sender_ip)
        .bind(new.created_at)
        .bind(new.expires_at)
        .execute(&self.pool)
        .await?;

        Ok(Message {
            id,
            text: new.text,
            sender_name: new.sender_name,
            sender_ip: new.sender_ip,
            created_at: new.created_at,
            expires_at: new.expires_at,
        })
    }

    async fn latest(&self, limit: i64, now: DateTime<Utc>) -> anyhow::Result<Vec<Message>> {
        let rows = sqlx::query(
            "SELECT * FROM messages WHERE expires_at > ? ORDER BY created_at DESC LIMIT ?",
        )
        .bind(now)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(row_to_message).collect())
    }

    /// SQLite's ORDER BY RANDOM() is a uniform sample over the filtered
    /// candidate set.
    async fn random_excluding(
        &self,
        sender_ip: &str,
        now: DateTime<Utc>,
    ) -> anyhow::Result<Option<Message>> {
        let row = sqlx::query(
            "SELECT * FROM messages WHERE sender_ip <> ? AND expires_at > ?
             ORDER BY RANDOM() LIMIT 1",
        )
        .bind(sender_ip)
        .bind(now)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(row_to_message))
    }

    async fn last_created_at(&self, sender_ip: &str) -> anyhow::Result<Option<DateTime<Utc>>> {
        let row = sqlx::query(
            "SELECT created_at FROM messages WHERE sender_ip = ?
             ORDER BY created_at DESC LIMIT 1",
        )
        .bind(sender_ip)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| r.get("created_at")))
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> anyhow::Result<u64> {
        let result = sqlx::query("DELETE FROM messages WHERE expires_at <= ?")
            .bind(now)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn export_all(&self) -> anyhow::Result<Vec<Message>> {
        let rows = sqlx::query("SELECT * FROM messages ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(row_to_message).collect())
    }
}
