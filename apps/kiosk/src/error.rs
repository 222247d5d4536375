//! # App Error Type
//!
//! Unified error type for the kiosk application.
//!
//! Core and store errors bubble up through `#[from]`; parse errors from the
//! prompt loop never reach this type - the loop re-prompts instead.

use thiserror::Error;

use kiosk_core::CoreError;
use kiosk_db::DbError;

/// Errors surfaced by the kiosk application.
#[derive(Debug, Error)]
pub enum AppError {
    /// A business-logic failure (menu construction, invalid selection).
    #[error("order error: {0}")]
    Core(#[from] CoreError),

    /// The ticket store failed.
    #[error("ticket store error: {0}")]
    Db(#[from] DbError),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Completion was requested on an order with nothing in it.
    ///
    /// The ticket service is never called in this case.
    #[error("Please add items before completing the order.")]
    EmptyOrder,
}
