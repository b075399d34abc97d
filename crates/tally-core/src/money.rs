//! # Money Module
//!
//! Provides the `Money` type for monetary values and the tax rounding rule.
//!
//! ## Why Floating Point Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE TRUNCATION RULE                                                    │
//! │                                                                         │
//! │  Receipt tax figures are defined by a truncate-then-round rule over     │
//! │  IEEE doubles:                                                          │
//! │                                                                         │
//! │    raw tax 0.075  → cents = (0.075 × 100) as integer = 7 (truncated)   │
//! │                   → 7 % 5 = 2 → round up → 10 cents → 0.10             │
//! │                                                                         │
//! │  Integer cents throughout would change the figure on boundary values:  │
//! │    47.50 × 0.15 = 7.125 → truncates to 712 cents → rounds up to 7.15   │
//! │                                                                         │
//! │  The truncation of the floating product IS the business rule, so       │
//! │  Money wraps f64 and pins that behavior down in one place.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tally_core::money::Money;
//!
//! let price = Money::new(14.99);
//! let tax = Money::new(14.99 * 0.10);
//!
//! // Round up to the nearest 5 cents
//! assert_eq!(tax.round_up_to_nearest(5), Money::new(1.50));
//!
//! // Two-decimal display for receipts
//! assert_eq!(format!("{}", price), "14.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in major currency units.
///
/// ## Design Decisions
/// - **f64**: Tax amounts are products of a price and a fractional rate,
///   truncated at the cents digit. The truncation applies to the floating
///   product, so the intermediate value must stay floating point.
/// - **Single field tuple struct**: Zero-cost abstraction over f64
/// - **Derives**: Full serde support for serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  LineItem.unit_price ──► duty tax (5%) ──┐                              │
/// │                     └──► sales tax (10%) ┴─► round_up_to_nearest(5)    │
/// │                                                      │                  │
/// │                                                      ▼                  │
/// │  unit price + rounded tax ──► × quantity ──► receipt line total        │
/// │                                                                         │
/// │  EVERY monetary value on the receipt flows through this type           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Money(f64);

impl Money {
    /// Creates a Money value from an amount in major units.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// let price = Money::new(10.99);
    /// assert_eq!(price.amount(), 10.99);
    /// ```
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in major units.
    #[inline]
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0.0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Rounds a tax amount UP to the nearest multiple of `unit_cents`.
    ///
    /// ## The Truncate-Then-Round Rule
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND UP TO NEAREST 0.05                                           │
    /// │                                                                     │
    /// │  1. Non-positive amounts pass through unchanged (zero stays zero)  │
    /// │                                                                     │
    /// │  2. cents = (amount × 100.0) truncated toward zero                 │
    /// │     NOTE: truncation, not rounding - 0.075 becomes 7 cents, not 8  │
    /// │                                                                     │
    /// │  3. remainder = cents % unit                                        │
    /// │     remainder > 0  → round up: (cents + unit - remainder) / 100    │
    /// │     remainder == 0 → the ORIGINAL amount passes through unchanged  │
    /// │                                                                     │
    /// │  Examples (unit = 5):                                              │
    /// │    0.075  → 7 cents  → 0.10                                        │
    /// │    0.5625 → 56 cents → 0.60                                        │
    /// │    1.499  → 149 cents → 1.50                                       │
    /// │    0.50   → 50 cents → 0.50 (unchanged)                            │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// The result is never below the input, and applying the rule twice
    /// yields the same value as applying it once.
    ///
    /// ## Example
    /// ```rust
    /// use tally_core::money::Money;
    ///
    /// assert_eq!(Money::new(0.075).round_up_to_nearest(5), Money::new(0.10));
    /// assert_eq!(Money::new(0.5625).round_up_to_nearest(5), Money::new(0.60));
    /// assert_eq!(Money::zero().round_up_to_nearest(5), Money::zero());
    /// ```
    pub fn round_up_to_nearest(&self, unit_cents: i64) -> Money {
        if self.0 <= 0.0 {
            return *self;
        }

        // Truncation toward zero is intentional: 7.5 cents becomes 7, and
        // the subsequent round-up carries it to 10.
        let cents = (self.0 * 100.0) as i64;
        let remainder = cents % unit_cents;

        if remainder > 0 {
            Money((cents + (unit_cents - remainder)) as f64 / 100.0)
        } else {
            *self
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money with two decimals, as on the receipt.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty as f64)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_and_amount() {
        let money = Money::new(10.99);
        assert_eq!(money.amount(), 10.99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(10.99)), "10.99");
        assert_eq!(format!("{}", Money::new(5.0)), "5.00");
        assert_eq!(format!("{}", Money::new(0.85)), "0.85");
        assert_eq!(format!("{}", Money::zero()), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::new(10.00);
        let b = Money::new(0.50);

        assert_eq!(a + b, Money::new(10.50));

        let mut total = Money::zero();
        total += a;
        total += b;
        assert_eq!(total, Money::new(10.50));

        assert_eq!(Money::new(12.49) * 2, Money::new(24.98));
    }

    #[test]
    fn test_round_up_zero_and_negative_pass_through() {
        assert_eq!(Money::zero().round_up_to_nearest(5), Money::zero());
        assert_eq!(Money::new(-1.0).round_up_to_nearest(5), Money::new(-1.0));
    }

    #[test]
    fn test_round_up_truncates_cents_first() {
        // 0.075 truncates to 7 cents (not 8), then rounds up to 10
        assert_eq!(Money::new(0.075).round_up_to_nearest(5), Money::new(0.10));
        // 0.5625 truncates to 56 cents, rounds up to 60
        assert_eq!(Money::new(0.5625).round_up_to_nearest(5), Money::new(0.60));
        // 47.50 × 15% = 7.125 truncates to 712 cents, rounds up to 715
        assert_eq!(Money::new(7.125).round_up_to_nearest(5), Money::new(7.15));
    }

    #[test]
    fn test_round_up_basic_cases() {
        // 14.99 × 10% = 1.499 → 150 cents
        assert_eq!(
            Money::new(14.99 * 0.10).round_up_to_nearest(5),
            Money::new(1.50)
        );
        // Exact multiples pass through unchanged
        assert_eq!(Money::new(0.50).round_up_to_nearest(5), Money::new(0.50));
        assert_eq!(Money::new(2.00).round_up_to_nearest(5), Money::new(2.00));
    }

    proptest! {
        /// Applying the rounding rule twice yields the same result as once.
        #[test]
        fn test_round_up_is_idempotent(raw in 0.0f64..1000.0) {
            let once = Money::new(raw).round_up_to_nearest(5);
            let twice = once.round_up_to_nearest(5);
            prop_assert_eq!(once, twice);
        }

        /// The rounded amount is never below the raw amount, and never more
        /// than one rounding unit above it.
        #[test]
        fn test_round_up_never_rounds_down(raw in 0.0f64..1000.0) {
            let rounded = Money::new(raw).round_up_to_nearest(5);
            prop_assert!(rounded.amount() >= raw);
            prop_assert!(rounded.amount() <= raw + 0.05);
        }
    }
}
