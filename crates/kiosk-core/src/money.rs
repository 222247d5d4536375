//! # Money Module
//!
//! Provides the `Won` type for handling displayed amounts safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                     │
//! │                                                                 │
//! │  In floating point:                                             │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                   │
//! │                                                                 │
//! │  OUR SOLUTION: integer won                                      │
//! │    Every amount in the system is a whole number of won.         │
//! │    Discount math is integer math, truncation is explicit.       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The won has no minor unit in this system; "won" is purely the display
//! label attached to amounts, never a separate type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Won Type
// =============================================================================

/// A monetary amount in whole won.
///
/// ## Design Decisions
/// - **i64 (signed)**: discount amounts are computed by subtraction
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Integer math only**: no constructor from floats exists
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Won(i64);

impl Won {
    /// Creates an amount from a whole number of won.
    #[inline]
    pub const fn new(amount: i64) -> Self {
        Won(amount)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Returns the zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Won(0)
    }

    /// Checks if the amount is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the amount is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Takes a percentage of this amount, expressed in basis points,
    /// truncating toward zero.
    ///
    /// Truncation (not rounding) is load-bearing: the discount rule is
    /// defined as `floor(total * 0.9)`, so `9000` bps of `10001` won must be
    /// `9000`, never `9001`.
    ///
    /// ## Example
    /// ```rust
    /// use kiosk_core::Won;
    ///
    /// let total = Won::new(10000);
    /// assert_eq!(total.percent_of(9000), Won::new(9000)); // 90%
    /// ```
    pub const fn percent_of(&self, bps: u32) -> Won {
        // i128 widening so large totals cannot overflow the intermediate
        Won((self.0 as i128 * bps as i128 / 10_000) as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display renders the amount with its currency label, e.g. `3000 won`.
impl fmt::Display for Won {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} won", self.0)
    }
}

impl Add for Won {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Won(self.0 + other.0)
    }
}

impl AddAssign for Won {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Won {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Won(self.0 - other.0)
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Won {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Won(self.0 * qty as i64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_and_accessors() {
        let price = Won::new(3000);
        assert_eq!(price.amount(), 3000);
        assert!(price.is_positive());
        assert!(!price.is_zero());

        let zero = Won::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
    }

    #[test]
    fn test_display_appends_label() {
        assert_eq!(Won::new(3000).to_string(), "3000 won");
        assert_eq!(Won::zero().to_string(), "0 won");
    }

    #[test]
    fn test_arithmetic() {
        let a = Won::new(3000);
        let b = Won::new(3500);

        assert_eq!(a + b, Won::new(6500));
        assert_eq!(b - a, Won::new(500));
        assert_eq!(a * 4, Won::new(12000));

        let mut running = Won::zero();
        running += a;
        running += a;
        assert_eq!(running, Won::new(6000));
    }

    #[test]
    fn test_percent_of_truncates() {
        // 90% of 10001 is 9000.9 → truncated to 9000
        assert_eq!(Won::new(10001).percent_of(9000), Won::new(9000));
        assert_eq!(Won::new(10000).percent_of(9000), Won::new(9000));
        assert_eq!(Won::zero().percent_of(9000), Won::zero());
    }

    #[test]
    fn test_percent_of_large_amount_does_not_overflow() {
        let huge = Won::new(i64::MAX / 2);
        let discounted = huge.percent_of(9000);
        assert!(discounted.amount() < huge.amount());
        assert!(discounted.is_positive());
    }
}
