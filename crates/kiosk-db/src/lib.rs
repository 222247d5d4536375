//! # kiosk-db: Ticket Store for the Cafe Kiosk
//!
//! The kiosk persists exactly one thing: the queue ticket counter. This
//! crate owns that store - SQLite connection pooling, the single-table
//! schema, and the issuance queries.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Cafe Kiosk Data Flow                        │
//! │                                                                 │
//! │  OrderSession::complete()  (apps/kiosk)                         │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 kiosk-db (THIS CRATE)                     │  │
//! │  │                                                           │  │
//! │  │   ┌────────────────┐        ┌────────────────────────┐    │  │
//! │  │   │  TicketStore   │───────►│  TicketNumberService   │    │  │
//! │  │   │  (store.rs)    │        │  (ticket.rs)           │    │  │
//! │  │   │  pool + schema │        │  MAX(number)+1, insert │    │  │
//! │  │   └────────────────┘        └────────────────────────┘    │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! │       │                                                         │
//! │       ▼                                                         │
//! │  SQLite file: queue_number.db                                   │
//! │  tickets(id INTEGER PRIMARY KEY AUTOINCREMENT, number INTEGER)  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use kiosk_db::{StoreConfig, TicketStore};
//!
//! let store = TicketStore::open(StoreConfig::new("queue_number.db")).await?;
//! let ticket = store.tickets().next_ticket_number().await?;
//! store.close().await; // explicit release, every exit path
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;
pub mod ticket;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use store::{StoreConfig, TicketStore};
pub use ticket::TicketNumberService;
