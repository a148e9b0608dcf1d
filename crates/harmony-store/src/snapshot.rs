//! # Snapshot Repository
//!
//! Key-value access to the `snapshots` table: the durable storage behind
//! the state store.
//!
//! ## Storage Layout
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  snapshots                                                          │
//! │                                                                     │
//! │  key                  │ value (JSON)              │ updated_at      │
//! │  ─────────────────────┼───────────────────────────┼─────────────    │
//! │  harmony_user         │ {"id":"…","name":"…",…}   │ 2025-11-03T…    │
//! │  harmony_bookings     │ [{…newest},{…},…]         │ 2025-11-03T…    │
//! │  harmony_providers    │ [{…},{…},{…},{…}]         │ 2025-11-03T…    │
//! │                                                                     │
//! │  Every write replaces the WHOLE value for its key. There is no      │
//! │  partial update and no row for the volatile cart.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

// =============================================================================
// Snapshot Keys
// =============================================================================

/// Fixed key names for the persisted slices of application state.
pub mod keys {
    /// Serialized session [`harmony_core::User`], or row absent when
    /// signed out.
    pub const USER: &str = "harmony_user";

    /// Serialized list of [`harmony_core::Booking`], newest first.
    pub const BOOKINGS: &str = "harmony_bookings";

    /// Serialized list of [`harmony_core::ServiceProvider`].
    pub const PROVIDERS: &str = "harmony_providers";
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for snapshot reads and writes.
///
/// ## Usage
/// ```rust,ignore
/// let repo = db.snapshots();
/// repo.put(keys::USER, &json).await?;
/// let saved = repo.get(keys::USER).await?;
/// ```
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    /// Creates a new SnapshotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SnapshotRepository { pool }
    }

    /// Reads the payload stored under `key`, if any.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value: Option<String> =
            sqlx::query_scalar("SELECT value FROM snapshots WHERE key = ?1")
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        debug!(key = %key, present = value.is_some(), "Snapshot read");
        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous payload.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Snapshot written");
        Ok(())
    }

    /// Removes the row for `key` entirely. A no-op for an absent key.
    pub async fn delete(&self, key: &str) -> DbResult<()> {
        sqlx::query("DELETE FROM snapshots WHERE key = ?1")
            .bind(key)
            .execute(&self.pool)
            .await?;

        debug!(key = %key, "Snapshot deleted");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_get_absent_key() {
        let db = test_db().await;
        assert_eq!(db.snapshots().get(keys::USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let db = test_db().await;
        let repo = db.snapshots();

        repo.put(keys::BOOKINGS, "[]").await.unwrap();
        assert_eq!(repo.get(keys::BOOKINGS).await.unwrap().as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn test_put_replaces_whole_value() {
        let db = test_db().await;
        let repo = db.snapshots();

        repo.put(keys::USER, r#"{"a":1}"#).await.unwrap();
        repo.put(keys::USER, r#"{"b":2}"#).await.unwrap();

        assert_eq!(
            repo.get(keys::USER).await.unwrap().as_deref(),
            Some(r#"{"b":2}"#)
        );
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let db = test_db().await;
        let repo = db.snapshots();

        repo.put(keys::USER, "{}").await.unwrap();
        repo.delete(keys::USER).await.unwrap();
        assert_eq!(repo.get(keys::USER).await.unwrap(), None);

        // Deleting an absent key is a no-op
        repo.delete(keys::USER).await.unwrap();
    }
}
