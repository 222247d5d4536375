//! # Menu Catalog
//!
//! The fixed drink catalog the kiosk sells from.
//!
//! ## Position As Identifier
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Menu (immutable)                            │
//! │                                                                 │
//! │  position 0 ──► Americano   3000 won                            │
//! │  position 1 ──► Latte       3500 won                            │
//! │  position 2 ──► Cappuccino  3700 won                            │
//! │  position 3 ──► Mocha       4000 won                            │
//! │                                                                 │
//! │  The position is the stable identifier: the UI labels buttons   │
//! │  and prompts with it, and OrderProcessor accumulates by it.     │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The menu is constructed once at startup and never mutated.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::money::Won;

/// One sellable item: a name and a non-negative price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: Won,
}

impl MenuItem {
    /// Creates a menu item.
    pub fn new(name: impl Into<String>, price: Won) -> Self {
        MenuItem {
            name: name.into(),
            price,
        }
    }
}

/// An ordered, immutable sequence of menu items indexed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    /// Builds a menu from paired name and price sequences.
    ///
    /// ## Errors
    /// `CoreError::MenuLengthMismatch` when the sequences differ in length.
    /// Nothing is constructed in that case.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::{Menu, Won};
    ///
    /// let menu = Menu::new(
    ///     vec!["Americano".into(), "Latte".into()],
    ///     vec![Won::new(3000), Won::new(3500)],
    /// )
    /// .unwrap();
    /// assert_eq!(menu.len(), 2);
    /// ```
    pub fn new(names: Vec<String>, prices: Vec<Won>) -> CoreResult<Self> {
        if names.len() != prices.len() {
            return Err(CoreError::MenuLengthMismatch {
                drinks: names.len(),
                prices: prices.len(),
            });
        }

        let items = names
            .into_iter()
            .zip(prices)
            .map(|(name, price)| MenuItem { name, price })
            .collect();

        Ok(Menu { items })
    }

    /// Builds a menu directly from items.
    pub fn from_items(items: Vec<MenuItem>) -> Self {
        Menu { items }
    }

    /// Number of items on the menu.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the menu has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `position`, if in range.
    pub fn get(&self, position: usize) -> Option<&MenuItem> {
        self.items.get(position)
    }

    /// Item at `position`, failing with `InvalidSelection` when out of range.
    pub fn item(&self, position: usize) -> CoreResult<&MenuItem> {
        self.items
            .get(position)
            .ok_or(CoreError::InvalidSelection {
                index: position,
                menu_len: self.items.len(),
            })
    }

    /// Price at `position`, failing with `InvalidSelection` when out of range.
    pub fn price(&self, position: usize) -> CoreResult<Won> {
        self.item(position).map(|item| item.price)
    }

    /// Iterates items in position order.
    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cafe_menu() -> Menu {
        Menu::new(
            vec!["Americano".into(), "Latte".into()],
            vec![Won::new(3000), Won::new(3500)],
        )
        .unwrap()
    }

    #[test]
    fn test_construction_pairs_names_and_prices() {
        let menu = cafe_menu();

        assert_eq!(menu.len(), 2);
        assert_eq!(menu.item(0).unwrap().name, "Americano");
        assert_eq!(menu.price(1).unwrap(), Won::new(3500));
    }

    #[test]
    fn test_mismatched_lengths_fail_with_no_partial_state() {
        let result = Menu::new(
            vec!["Americano".into(), "Latte".into()],
            vec![Won::new(3000)],
        );

        assert_eq!(
            result.unwrap_err(),
            CoreError::MenuLengthMismatch {
                drinks: 2,
                prices: 1,
            }
        );
    }

    #[test]
    fn test_from_items_matches_paired_construction() {
        let from_items = Menu::from_items(vec![
            MenuItem::new("Americano", Won::new(3000)),
            MenuItem::new("Latte", Won::new(3500)),
        ]);

        assert_eq!(from_items, cafe_menu());
    }

    #[test]
    fn test_out_of_range_access_is_an_error() {
        let menu = cafe_menu();

        assert!(menu.get(2).is_none());
        assert_eq!(
            menu.item(2).unwrap_err(),
            CoreError::InvalidSelection {
                index: 2,
                menu_len: 2,
            }
        );
    }

    #[test]
    fn test_iteration_preserves_position_order() {
        let menu = cafe_menu();
        let names: Vec<&str> = menu.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Americano", "Latte"]);
    }
}
