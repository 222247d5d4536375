//! # Ticket Store Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                            │
//! │                                                                 │
//! │  SQLite error (sqlx::Error)                                     │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  DbError (this module) ← adds categorization                    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  AppError (apps/kiosk) ← user-visible notice                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Ticket store operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Opening the store failed.
    ///
    /// ## When This Occurs
    /// - Store file can't be created (permissions, disk full)
    /// - Invalid database path
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A query against the ticket table failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// The store was already closed.
    #[error("Ticket store is closed")]
    Closed,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::PoolTimedOut → DbError::PoolExhausted
/// sqlx::Error::PoolClosed   → DbError::Closed
/// sqlx::Error::Database     → DbError::QueryFailed
/// Other                     → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,
            sqlx::Error::PoolClosed => DbError::Closed,
            sqlx::Error::Database(db_err) => DbError::QueryFailed(db_err.message().to_string()),
            _ => DbError::Internal(err.to_string()),
        }
    }
}

/// Result type for ticket store operations.
pub type DbResult<T> = Result<T, DbError>;
