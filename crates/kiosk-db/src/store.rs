//! # Ticket Store
//!
//! Connection pool creation and schema setup for the persisted ticket
//! counter.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Ticket Store Lifecycle                      │
//! │                                                                 │
//! │  App startup                                                    │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  StoreConfig::new(path) ← configure pool settings               │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  TicketStore::open(config).await                                │
//! │       │   • creates the db file if absent                       │
//! │       │   • CREATE TABLE IF NOT EXISTS tickets                  │
//! │       ▼                                                         │
//! │  store.tickets().next_ticket_number().await  (per completion)   │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  store.close().await ← explicit release on every exit path      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The release is explicit and deterministic: the app calls [`TicketStore::close`]
//! on shutdown rather than relying on drop order.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::ticket::TicketNumberService;

// =============================================================================
// Configuration
// =============================================================================

/// Ticket store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("/path/to/queue_number.db")
///     .max_connections(2);
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 2 (a single kiosk issues tickets sequentially)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    /// Default: 1
    pub min_connections: u32,

    /// Connection acquire timeout.
    /// Default: 30 seconds
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    /// Default: 10 minutes
    pub idle_timeout: Duration,
}

impl StoreConfig {
    /// Creates a configuration for the given database path.
    ///
    /// The file is created on open if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            database_path: path.into(),
            max_connections: 2,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
        }
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Creates an in-memory store configuration (for testing).
    ///
    /// A single connection is required: every connection to `:memory:` is a
    /// separate database, so the pool must never hand out a second one.
    pub fn in_memory() -> Self {
        StoreConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(600),
        }
    }

    fn is_in_memory(&self) -> bool {
        self.database_path == Path::new(":memory:")
    }
}

// =============================================================================
// Ticket Store
// =============================================================================

/// Handle to the persisted ticket counter store.
///
/// Cloning is cheap: clones share the same pool. One store is opened per
/// process and closed explicitly on shutdown.
#[derive(Debug, Clone)]
pub struct TicketStore {
    pool: SqlitePool,
}

impl TicketStore {
    /// Opens the ticket store.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite (WAL journal for file-backed stores, foreign
    ///    keys on)
    /// 3. Creates the connection pool
    /// 4. Creates the `tickets` table if absent
    ///
    /// ## Errors
    /// `DbError::ConnectionFailed` when the file can't be opened or created.
    pub async fn open(config: StoreConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Opening ticket store"
        );

        let connect_options = if config.is_in_memory() {
            SqliteConnectOptions::from_str("sqlite::memory:")
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
        } else {
            let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());
            SqliteConnectOptions::from_str(&connect_url)
                .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
                // WAL mode: readers and writers don't block each other
                .journal_mode(SqliteJournalMode::Wal)
                // NORMAL synchronous: safe from corruption, fast enough
                .synchronous(SqliteSynchronous::Normal)
                .foreign_keys(true)
                .create_if_missing(true)
        };

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        let store = TicketStore { pool };
        store.init_schema().await?;

        info!("Ticket store ready");
        Ok(store)
    }

    /// Creates the ticket table if it doesn't exist.
    ///
    /// The persisted schema is exactly one append-only table; every row is
    /// one issued ticket number.
    async fn init_schema(&self) -> DbResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS tickets (
                id     INTEGER PRIMARY KEY AUTOINCREMENT,
                number INTEGER NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        debug!("Ticket table present");
        Ok(())
    }

    /// Returns the ticket number service backed by this store.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let ticket = store.tickets().next_ticket_number().await?;
    /// ```
    pub fn tickets(&self) -> TicketNumberService {
        TicketNumberService::new(self.pool.clone())
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Closes the store, releasing the underlying connections.
    ///
    /// ## When To Call
    /// On every exit path of the application, including error paths. After
    /// closing, ticket operations fail with `DbError::Closed`.
    pub async fn close(&self) {
        info!("Closing ticket store");
        self.pool.close().await;
    }

    /// Checks that the store can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_in_memory_store_opens_and_responds() {
        let store = TicketStore::open(StoreConfig::in_memory()).await.unwrap();
        assert!(store.health_check().await);
    }

    #[tokio::test]
    async fn test_schema_init_is_idempotent() {
        let store = TicketStore::open(StoreConfig::in_memory()).await.unwrap();
        // Second run must be a no-op, not an error
        store.init_schema().await.unwrap();
    }

    #[tokio::test]
    async fn test_pool_reaches_the_same_ticket_table() {
        use sqlx::Row;

        let store = TicketStore::open(StoreConfig::in_memory()).await.unwrap();
        store.tickets().next_ticket_number().await.unwrap();
        store.tickets().next_ticket_number().await.unwrap();

        // Raw queries through the pool see the rows the service appended
        let row = sqlx::query("SELECT COUNT(*) AS n, MAX(number) AS top FROM tickets")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(row.get::<i64, _>("n"), 2);
        assert_eq!(row.get::<i64, _>("top"), 2);
    }

    #[tokio::test]
    async fn test_closed_store_rejects_operations() {
        let store = TicketStore::open(StoreConfig::in_memory()).await.unwrap();
        store.close().await;

        assert!(!store.health_check().await);
        let err = store.tickets().next_ticket_number().await.unwrap_err();
        assert!(matches!(err, DbError::Closed));
    }

    #[test]
    fn test_config_builder() {
        let config = StoreConfig::new("/tmp/queue_number.db")
            .max_connections(4)
            .min_connections(2);

        assert_eq!(config.max_connections, 4);
        assert_eq!(config.min_connections, 2);
        assert!(!config.is_in_memory());
        assert!(StoreConfig::in_memory().is_in_memory());
    }
}
