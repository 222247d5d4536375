//! # Discount Policies
//!
//! Pluggable discount rules applied to an order total.
//!
//! ## Capability, Not Subclass
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                   DiscountPolicy (trait)                        │
//! │                                                                 │
//! │            apply(total: Won) -> Won,  apply(t) <= t             │
//! │                         │                                       │
//! │          ┌──────────────┴──────────────┐                        │
//! │          ▼                             ▼                        │
//! │    NoDiscount                TenPercentOverThreshold            │
//! │    (identity)                (10% off at >= 10000 won)          │
//! │                                                                 │
//! │  OrderProcessor only sees the trait; swapping in a tiered or    │
//! │  coupon policy never touches it.                                │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Won;

/// A pure discount rule over an order total.
///
/// ## Contract
/// `apply(total)` must return a value less than or equal to `total`.
/// Implementations are pure: same input, same output, no side effects.
pub trait DiscountPolicy {
    /// Returns the total after discount.
    fn apply(&self, total: Won) -> Won;
}

/// The identity policy: no discount is ever applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDiscount;

impl DiscountPolicy for NoDiscount {
    fn apply(&self, total: Won) -> Won {
        total
    }
}

/// Percentage-off-over-threshold: orders reaching the threshold get a flat
/// percentage discount; smaller orders are unchanged.
///
/// The discounted total is truncated toward zero, matching
/// `floor(total * (1 - rate))`.
#[derive(Debug, Clone, Copy)]
pub struct TenPercentOverThreshold {
    threshold: Won,
    /// Discount rate in basis points (1000 = 10%).
    rate_bps: u32,
}

impl TenPercentOverThreshold {
    /// The standard kiosk rule: 10% off at 10 000 won and above.
    pub const fn new() -> Self {
        TenPercentOverThreshold {
            threshold: Won::new(10_000),
            rate_bps: 1_000,
        }
    }

    /// A custom threshold/rate pair, for future tiers.
    pub const fn with_rule(threshold: Won, rate_bps: u32) -> Self {
        TenPercentOverThreshold {
            threshold,
            rate_bps,
        }
    }
}

impl Default for TenPercentOverThreshold {
    fn default() -> Self {
        Self::new()
    }
}

impl DiscountPolicy for TenPercentOverThreshold {
    fn apply(&self, total: Won) -> Won {
        if total >= self.threshold {
            total.percent_of(10_000 - self.rate_bps)
        } else {
            total
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_policy_changes_nothing() {
        let policy = NoDiscount;
        assert_eq!(policy.apply(Won::new(9999)), Won::new(9999));
        assert_eq!(policy.apply(Won::new(120_000)), Won::new(120_000));
    }

    #[test]
    fn test_threshold_boundary() {
        let policy = TenPercentOverThreshold::new();

        // Just below threshold: unchanged
        assert_eq!(policy.apply(Won::new(9999)), Won::new(9999));
        // Exactly at threshold: 10% off
        assert_eq!(policy.apply(Won::new(10_000)), Won::new(9_000));
        // Zero order
        assert_eq!(policy.apply(Won::zero()), Won::zero());
    }

    #[test]
    fn test_discounted_total_truncates() {
        let policy = TenPercentOverThreshold::new();
        // 10001 * 0.9 = 9000.9 → 9000
        assert_eq!(policy.apply(Won::new(10_001)), Won::new(9_000));
    }

    #[test]
    fn test_apply_never_exceeds_input() {
        let policy = TenPercentOverThreshold::new();
        for amount in [0i64, 1, 9_999, 10_000, 10_001, 12_000, 1_000_000] {
            let total = Won::new(amount);
            assert!(policy.apply(total) <= total, "apply({}) > input", amount);
        }
    }

    #[test]
    fn test_custom_rule() {
        // 20% off at 5000 won
        let policy = TenPercentOverThreshold::with_rule(Won::new(5_000), 2_000);
        assert_eq!(policy.apply(Won::new(4_999)), Won::new(4_999));
        assert_eq!(policy.apply(Won::new(5_000)), Won::new(4_000));
    }

    #[test]
    fn test_policies_are_object_safe() {
        let policies: Vec<Box<dyn DiscountPolicy>> = vec![
            Box::new(NoDiscount),
            Box::new(TenPercentOverThreshold::new()),
        ];
        assert_eq!(policies[0].apply(Won::new(10_000)), Won::new(10_000));
        assert_eq!(policies[1].apply(Won::new(10_000)), Won::new(9_000));
    }
}
