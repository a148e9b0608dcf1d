//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                         │
//! │                                                                     │
//! │  In JavaScript/floating point:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                       │
//! │                                                                     │
//! │  Splitting a ₹49 platform fee across 3 cart lines:                  │
//! │    49 / 3 = 16.333333... → unrepresentable, silently drifts         │
//! │                                                                     │
//! │  OUR SOLUTION: Integer Paise                                        │
//! │    4900 paise / 3 = 1633 paise + 1 remainder paisa                  │
//! │    The remainder is allocated explicitly, never lost                │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use harmony_core::money::Money;
//!
//! // Create from rupees or paise (preferred)
//! let price = Money::from_rupees(2500);   // ₹2500.00
//! let fee = Money::from_paise(4900);      // ₹49.00
//!
//! // Arithmetic operations
//! let total = price + fee;                // ₹2549.00
//! assert_eq!(total.paise(), 254_900);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in paise (1/100 of a rupee).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for refunds and adjustments
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Transparent serde**: Serializes as a bare integer paise count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use harmony_core::money::Money;
    ///
    /// let fee = Money::from_paise(4900); // Represents ₹49.00
    /// assert_eq!(fee.paise(), 4900);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    ///
    /// ## Example
    /// ```rust
    /// use harmony_core::money::Money;
    ///
    /// let price = Money::from_rupees(2500);
    /// assert_eq!(price.paise(), 250_000);
    /// ```
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise (smallest currency unit).
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the whole-rupee portion.
    ///
    /// ## Example
    /// ```rust
    /// use harmony_core::money::Money;
    ///
    /// let amount = Money::from_paise(2450);
    /// assert_eq!(amount.rupees(), 24);
    /// assert_eq!(amount.paise_part(), 50);
    /// ```
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the paise portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Splits this amount into `shares` parts that sum back to the whole.
    ///
    /// Integer division cannot always split evenly; the indivisible
    /// remainder paise are allocated one each to the earliest shares so no
    /// paisa is ever lost. Intended for non-negative amounts (fee
    /// allocation).
    ///
    /// ## Example
    /// ```rust
    /// use harmony_core::money::Money;
    ///
    /// // ₹49.00 across two cart lines: ₹24.50 each
    /// let shares = Money::from_rupees(49).split_even(2);
    /// assert_eq!(shares, vec![Money::from_paise(2450), Money::from_paise(2450)]);
    ///
    /// // ₹49.00 across three lines: the first absorbs the remainder paisa
    /// let shares = Money::from_rupees(49).split_even(3);
    /// assert_eq!(
    ///     shares,
    ///     vec![
    ///         Money::from_paise(1634),
    ///         Money::from_paise(1633),
    ///         Money::from_paise(1633),
    ///     ]
    /// );
    /// ```
    pub fn split_even(&self, shares: usize) -> Vec<Money> {
        if shares == 0 {
            return Vec::new();
        }

        let n = shares as i64;
        let base = self.0 / n;
        let remainder = self.0 % n;

        (0..n)
            .map(|i| {
                if i < remainder {
                    Money(base + 1)
                } else {
                    Money(base)
                }
            })
            .collect()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and receipts. UI display formatting (grouping,
/// localization) belongs to the view layer.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation, for cart subtotals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(2450);
        assert_eq!(money.paise(), 2450);
        assert_eq!(money.rupees(), 24);
        assert_eq!(money.paise_part(), 50);
    }

    #[test]
    fn test_from_rupees() {
        assert_eq!(Money::from_rupees(49).paise(), 4900);
        assert_eq!(Money::from_rupees(-5).paise(), -500);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_rupees(2500)), "₹2500.00");
        assert_eq!(format!("{}", Money::from_paise(2450)), "₹24.50");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::zero()), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((a * 3).paise(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300]
            .iter()
            .map(|&r| Money::from_rupees(r))
            .sum();
        assert_eq!(total, Money::from_rupees(600));
    }

    #[test]
    fn test_split_even_exact() {
        let shares = Money::from_rupees(49).split_even(2);
        assert_eq!(shares, vec![Money::from_paise(2450); 2]);
    }

    #[test]
    fn test_split_even_single_share_gets_everything() {
        let shares = Money::from_rupees(49).split_even(1);
        assert_eq!(shares, vec![Money::from_rupees(49)]);
    }

    #[test]
    fn test_split_even_remainder_goes_to_earliest_shares() {
        let shares = Money::from_paise(4900).split_even(3);
        assert_eq!(shares[0].paise(), 1634);
        assert_eq!(shares[1].paise(), 1633);
        assert_eq!(shares[2].paise(), 1633);

        // Fully allocated: the shares reconstruct the whole
        let total: Money = shares.into_iter().sum();
        assert_eq!(total.paise(), 4900);
    }

    #[test]
    fn test_split_even_zero_shares() {
        assert!(Money::from_rupees(49).split_even(0).is_empty());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        assert!(Money::from_paise(100).is_positive());
        assert!(Money::from_paise(-100).is_negative());
    }
}
