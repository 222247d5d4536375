//! # Error Types
//!
//! Domain-specific error types for kiosk-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         Error Types                             │
//! │                                                                 │
//! │  kiosk-core errors (this file)                                  │
//! │  └── CoreError   - Menu construction / selection failures       │
//! │                                                                 │
//! │  kiosk-db errors (separate crate)                               │
//! │  └── DbError     - Ticket store failures                        │
//! │                                                                 │
//! │  App errors (apps/kiosk)                                        │
//! │  └── AppError    - Wraps both, plus empty-order refusal         │
//! │                                                                 │
//! │  Flow: CoreError / DbError → AppError → user-visible notice     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (index, lengths)
//! 3. Errors are enum variants, never String
//! 4. An error is fatal to the operation that triggered it, not the process

use thiserror::Error;

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Menu construction received name/price sequences of different lengths.
    ///
    /// ## When This Occurs
    /// - The catalog arrays passed to `Menu::new` are out of sync
    ///
    /// No partial menu is constructed when this is returned.
    #[error("menu has {drinks} drinks but {prices} prices")]
    MenuLengthMismatch { drinks: usize, prices: usize },

    /// A selection referenced a position outside the menu.
    ///
    /// ## When This Occurs
    /// - `OrderProcessor::process_order` with an out-of-range position
    /// - `Menu::item` with an out-of-range position
    #[error("selection {index} is out of range for a menu of {menu_len} items")]
    InvalidSelection { index: usize, menu_len: usize },
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;
