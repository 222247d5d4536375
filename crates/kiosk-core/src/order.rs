//! # Order Processor
//!
//! Accumulates selections against a menu and derives the receipt.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                  OrderProcessor Lifecycle                       │
//! │                                                                 │
//! │  ┌──────────────┐   process_order(p)   ┌──────────────┐         │
//! │  │ Accumulating │─────────────────────►│ Accumulating │ ...     │
//! │  └──────────────┘                      └──────┬───────┘         │
//! │                                               │ complete/reset  │
//! │                                               ▼                 │
//! │                                   instance discarded; a fresh   │
//! │                                   processor sharing the same    │
//! │                                   Arc<Menu> + policy replaces it│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! One processor serves one customer transaction. Completion and reset are
//! modeled by replacement, not by a state flag: the presentation layer drops
//! the instance and constructs a new one with a zeroed accumulator.
//!
//! This type is pure: ticket issuance (the only I/O in the system) happens
//! in the app layer against the kiosk-db ticket store.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::discount::DiscountPolicy;
use crate::error::CoreResult;
use crate::menu::{Menu, MenuItem};
use crate::money::Won;

/// Summary of an order's money amounts at a point in time.
///
/// Derived on request; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTotals {
    /// Sum over items of price × quantity.
    pub total: Won,
    /// Amount removed by the discount policy (zero when none applied).
    pub discount: Won,
    /// What the customer pays: `total - discount`.
    pub payable: Won,
}

/// Accumulates item selections and derives receipts.
///
/// ## Invariant
/// `total` always equals the sum over positions of `price × quantity`; the
/// total is maintained incrementally on every `process_order` call.
pub struct OrderProcessor {
    menu: Arc<Menu>,
    policy: Arc<dyn DiscountPolicy + Send + Sync>,
    quantities: Vec<u32>,
    total: Won,
}

impl OrderProcessor {
    /// Creates a processor with a zeroed accumulator.
    ///
    /// The menu and policy are shared: replacement instances created on
    /// complete/reset clone the same `Arc`s.
    pub fn new(menu: Arc<Menu>, policy: Arc<dyn DiscountPolicy + Send + Sync>) -> Self {
        let quantities = vec![0; menu.len()];
        OrderProcessor {
            menu,
            policy,
            quantities,
            total: Won::zero(),
        }
    }

    /// Records one more of the item at `position`.
    ///
    /// Increments that item's quantity by 1 and adds its price to the
    /// running total. Returns a copy of the ordered item so the caller can
    /// echo the selection.
    ///
    /// ## Errors
    /// `CoreError::InvalidSelection` when `position` is out of range; the
    /// accumulator is untouched in that case.
    pub fn process_order(&mut self, position: usize) -> CoreResult<MenuItem> {
        let item = self.menu.item(position)?.clone();
        self.quantities[position] += 1;
        self.total += item.price;
        Ok(item)
    }

    /// The menu this processor sells from.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Quantity recorded for the item at `position` (0 when out of range).
    pub fn quantity(&self, position: usize) -> u32 {
        self.quantities.get(position).copied().unwrap_or(0)
    }

    /// Running total before discount.
    pub fn total(&self) -> Won {
        self.total
    }

    /// Whether nothing has been ordered yet.
    pub fn is_empty(&self) -> bool {
        self.total.is_zero()
    }

    /// Computes the totals summary through the discount policy.
    pub fn totals(&self) -> OrderTotals {
        let payable = self.policy.apply(self.total);
        OrderTotals {
            total: self.total,
            discount: self.total - payable,
            payable,
        }
    }

    /// Renders the receipt text.
    ///
    /// The layout is fixed-width and must stay byte-compatible with the
    /// printed receipts already in circulation:
    ///
    /// ```text
    /// Product        Price     Amount    Subtotal
    /// --------------------------------------------------
    /// Americano      3000      2         6000 won
    /// --------------------------------------------------
    /// Total before discount:        6000 won
    /// No discount applied.
    /// Total:                        6000 won
    /// ```
    ///
    /// Items with zero quantity are skipped. When the policy reduces the
    /// total, the summary block shows the discount amount and the total
    /// after discount instead of the `No discount applied.` pair.
    pub fn receipt_text(&self) -> String {
        let mut receipt = format!(
            "{:<15}{:<10}{:<10}{:<10}\n",
            "Product", "Price", "Amount", "Subtotal"
        );
        receipt.push_str(&"-".repeat(50));
        receipt.push('\n');

        for (item, &qty) in self.menu.iter().zip(&self.quantities) {
            if qty > 0 {
                let subtotal = item.price * qty;
                receipt.push_str(&format!(
                    "{:<15}{:<10}{:<10}{} won\n",
                    item.name,
                    item.price.amount(),
                    qty,
                    subtotal.amount()
                ));
            }
        }

        let totals = self.totals();

        receipt.push_str(&"-".repeat(50));
        receipt.push('\n');
        receipt.push_str(&format!(
            "{:<30}{} won\n",
            "Total before discount:",
            totals.total.amount()
        ));
        if totals.discount.is_positive() {
            receipt.push_str(&format!(
                "{:<30}{} won\n",
                "Discount applied:",
                totals.discount.amount()
            ));
            receipt.push_str(&format!(
                "{:<30}{} won\n",
                "Total after discount:",
                totals.payable.amount()
            ));
        } else {
            receipt.push_str(&format!("{:<30}\n", "No discount applied."));
            receipt.push_str(&format!("{:<30}{} won\n", "Total:", totals.total.amount()));
        }

        receipt
    }
}

impl std::fmt::Debug for OrderProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderProcessor")
            .field("quantities", &self.quantities)
            .field("total", &self.total)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
