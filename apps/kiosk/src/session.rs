//! # Order Session
//!
//! The composition root for one kiosk: shared menu + policy, the current
//! order processor, and the ticket store.
//!
//! ## Session Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     OrderSession Operations                     │
//! │                                                                 │
//! │  UI Action               Session Call           Effect          │
//! │  ─────────               ────────────           ──────          │
//! │  Select item ──────────► process_order(p) ────► qty+1, total+   │
//! │  View order ───────────► receipt_text() ──────► (read only)     │
//! │  Complete ─────────────► complete() ──────────► ticket issued,  │
//! │                                                 fresh processor │
//! │  Reset ────────────────► reset() ─────────────► fresh processor │
//! │  Exit ─────────────────► shutdown() ──────────► store closed    │
//! │                                                                 │
//! │  complete() on an empty order is refused BEFORE the ticket      │
//! │  service is touched - no number is consumed.                    │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Complete and reset follow the replacement model: the finished processor
//! is dropped and a fresh one is built over the same `Arc<Menu>` and policy.

use std::sync::Arc;

use tracing::{debug, info};

use kiosk_core::{DiscountPolicy, Menu, MenuItem, OrderProcessor, Won};
use kiosk_db::TicketStore;

use crate::error::AppError;

/// The outcome of completing an order: the receipt as rendered at the moment
/// of completion, and the queue ticket issued for it.
#[derive(Debug, Clone)]
pub struct CompletedOrder {
    pub receipt: String,
    pub ticket_number: i64,
}

/// One kiosk's live state: current order plus the ticket store.
pub struct OrderSession {
    menu: Arc<Menu>,
    policy: Arc<dyn DiscountPolicy + Send + Sync>,
    processor: OrderProcessor,
    store: TicketStore,
}

impl OrderSession {
    /// Creates a session with an empty order.
    pub fn new(
        menu: Arc<Menu>,
        policy: Arc<dyn DiscountPolicy + Send + Sync>,
        store: TicketStore,
    ) -> Self {
        let processor = OrderProcessor::new(menu.clone(), policy.clone());
        OrderSession {
            menu,
            policy,
            processor,
            store,
        }
    }

    /// The menu this kiosk sells from.
    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Records one more of the item at `position` and returns it for echoing.
    pub fn process_order(&mut self, position: usize) -> Result<MenuItem, AppError> {
        let item = self.processor.process_order(position)?;
        debug!(position, name = %item.name, "Item added to order");
        Ok(item)
    }

    /// The current receipt, derived on request.
    pub fn receipt_text(&self) -> String {
        self.processor.receipt_text()
    }

    /// Running total before discount.
    pub fn total(&self) -> Won {
        self.processor.total()
    }

    /// Completes the current order: captures the receipt, issues exactly one
    /// queue ticket, and starts a fresh order.
    ///
    /// ## Errors
    /// `AppError::EmptyOrder` when nothing has been ordered; the ticket
    /// service is not called and no number is consumed.
    pub async fn complete(&mut self) -> Result<CompletedOrder, AppError> {
        if self.processor.is_empty() {
            return Err(AppError::EmptyOrder);
        }

        let receipt = self.processor.receipt_text();
        let ticket_number = self.store.tickets().next_ticket_number().await?;
        info!(ticket_number, total = %self.processor.total(), "Order completed");

        self.reset();
        Ok(CompletedOrder {
            receipt,
            ticket_number,
        })
    }

    /// Discards the current order and starts over with a zeroed accumulator.
    pub fn reset(&mut self) {
        self.processor = OrderProcessor::new(self.menu.clone(), self.policy.clone());
        debug!("Order reset");
    }

    /// Consumes the session and closes the ticket store.
    ///
    /// Called on every exit path so the store is released deterministically.
    pub async fn shutdown(self) {
        self.store.close().await;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::TenPercentOverThreshold;
    use kiosk_db::StoreConfig;

    async fn session() -> (OrderSession, TicketStore) {
        let store = TicketStore::open(StoreConfig::in_memory()).await.unwrap();
        let menu = Arc::new(
            Menu::new(
                vec!["Americano".into(), "Latte".into()],
                vec![Won::new(3000), Won::new(3500)],
            )
            .unwrap(),
        );
        let session = OrderSession::new(
            menu,
            Arc::new(TenPercentOverThreshold::new()),
            store.clone(),
        );
        (session, store)
    }

    #[tokio::test]
    async fn test_empty_completion_is_refused_without_touching_tickets() {
        let (mut session, store) = session().await;

        let err = session.complete().await.unwrap_err();
        assert!(matches!(err, AppError::EmptyOrder));
        assert_eq!(store.tickets().issued_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_completion_issues_one_ticket_and_resets() {
        let (mut session, store) = session().await;

        session.process_order(0).unwrap();
        session.process_order(1).unwrap();

        let completed = session.complete().await.unwrap();
        assert_eq!(completed.ticket_number, 1);
        assert!(completed.receipt.contains("Americano"));
        assert!(completed.receipt.contains("Latte"));

        // Fresh accumulator after completion
        assert!(session.total().is_zero());
        assert_eq!(store.tickets().issued_count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_consecutive_completions_increment_ticket_numbers() {
        let (mut session, _store) = session().await;

        for expected in 1..=3 {
            session.process_order(0).unwrap();
            let completed = session.complete().await.unwrap();
            assert_eq!(completed.ticket_number, expected);
        }
    }

    #[tokio::test]
    async fn test_reset_discards_the_order() {
        let (mut session, store) = session().await;

        session.process_order(0).unwrap();
        assert!(session.total().is_positive());

        session.reset();
        assert!(session.total().is_zero());
        assert_eq!(store.tickets().issued_count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_out_of_range_selection_surfaces_core_error() {
        let (mut session, _store) = session().await;
        let err = session.process_order(9).unwrap_err();
        assert!(matches!(err, AppError::Core(_)));
    }
}
