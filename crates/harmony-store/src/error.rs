//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  SQLite Error (sqlx::Error)                                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  DbError (this module) ← Adds context and categorization            │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError ← What AppStore consumers see, also carries             │
//! │       │        CoreError (business rules) and JSON failures         │
//! │       ▼                                                             │
//! │  View layer displays a user-facing message                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use harmony_core::CoreError;

// =============================================================================
// Database Error
// =============================================================================

/// Snapshot storage errors.
///
/// These wrap sqlx errors and provide additional context. Note that a
/// missing snapshot row is NOT an error (hydration falls back to
/// defaults); only real failures land here.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Store Error
// =============================================================================

/// Errors surfaced by `AppStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A business rule rejected the operation before any mutation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The snapshot storage failed.
    #[error(transparent)]
    Db(#[from] DbError),

    /// A snapshot payload could not be serialized or parsed.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<harmony_core::ValidationError> for StoreError {
    fn from(err: harmony_core::ValidationError) -> Self {
        StoreError::Core(CoreError::Validation(err))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
