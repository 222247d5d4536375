//! # kiosk-core: Pure Business Logic for the Cafe Kiosk
//!
//! This crate is the heart of the kiosk. It contains the menu catalog, the
//! order accumulator, and the discount rules as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Cafe Kiosk Architecture                     │
//! │                                                                 │
//! │  ┌───────────────────────────────────────────────────────────┐  │
//! │  │                 apps/kiosk (terminal UI)                  │  │
//! │  │     prompt loop ──► OrderSession ──► receipt + ticket     │  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │                                │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │              ★ kiosk-core (THIS CRATE) ★                  │  │
//! │  │                                                           │  │
//! │  │   ┌────────┐  ┌────────┐  ┌──────────┐  ┌──────────┐      │  │
//! │  │   │  menu  │  │ money  │  │ discount │  │  order   │      │  │
//! │  │   │  Menu  │  │  Won   │  │  Policy  │  │Processor │      │  │
//! │  │   └────────┘  └────────┘  └──────────┘  └──────────┘      │  │
//! │  │                                                           │  │
//! │  │   NO I/O • NO DATABASE • PURE FUNCTIONS                   │  │
//! │  └─────────────────────────────┬─────────────────────────────┘  │
//! │                                │                                │
//! │  ┌─────────────────────────────▼─────────────────────────────┐  │
//! │  │               kiosk-db (ticket counter store)             │  │
//! │  └───────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`menu`] - Immutable drink catalog indexed by position
//! - [`money`] - Integer [`Won`] amounts (no floating point!)
//! - [`discount`] - Pluggable [`discount::DiscountPolicy`] capability
//! - [`order`] - [`OrderProcessor`] accumulator and receipt rendering
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output - the receipt is a
//!    derivation, never stored state
//! 2. **No I/O**: ticket persistence lives in kiosk-db, never here
//! 3. **Integer money**: amounts are whole won (i64), discount math truncates
//! 4. **Explicit errors**: typed enum variants, never strings or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod discount;
pub mod error;
pub mod menu;
pub mod money;
pub mod order;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use discount::{DiscountPolicy, NoDiscount, TenPercentOverThreshold};
pub use error::{CoreError, CoreResult};
pub use menu::{Menu, MenuItem};
pub use money::Won;
pub use order::{OrderProcessor, OrderTotals};
