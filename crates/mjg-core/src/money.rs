//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! Catalog prices are quoted in whole currency units (a drink at ₦1,500 is
//! `Money::from_units(1500)`), so all arithmetic is plain integer math.
//! Display formatting groups thousands (`1500 → "1,500"`); the brand profile
//! supplies the currency symbol.
//!
//! ## Usage
//! ```rust
//! use mjg_core::money::Money;
//!
//! let price = Money::from_units(1500);
//! let line = price * 2i64;
//! assert_eq!(line.units(), 3000);
//! assert_eq!(line.grouped(), "3,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in whole currency units.
///
/// Signed so that refunds and corrections can be represented, even though
/// the booking flow only ever produces positive totals. Serializes as a bare
/// number, matching the wire shape of the catalog (`"price": 1500`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from whole currency units.
    #[inline]
    pub const fn from_units(units: i64) -> Self {
        Money(units)
    }

    /// Returns the value in whole currency units.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.abs())
    }

    /// Multiplies the value by a line quantity.
    ///
    /// ## Example
    /// ```rust
    /// use mjg_core::money::Money;
    ///
    /// let unit_price = Money::from_units(1500);
    /// assert_eq!(unit_price.multiply_quantity(3).units(), 4500);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Renders the value with grouped thousands and no currency symbol.
    ///
    /// ## Example
    /// ```rust
    /// use mjg_core::money::Money;
    ///
    /// assert_eq!(Money::from_units(250000).grouped(), "250,000");
    /// assert_eq!(Money::from_units(-1500).grouped(), "-1,500");
    /// assert_eq!(Money::from_units(999).grouped(), "999");
    /// ```
    pub fn grouped(&self) -> String {
        let digits = self.0.unsigned_abs().to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
        if self.0 < 0 {
            out.push('-');
        }
        let len = digits.len();
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display uses grouped-thousands formatting without a symbol; the brand
/// profile owns the symbol.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grouped())
    }
}

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

/// Multiplication by integer (for quantity calculations).
impl Mul<i32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i32) -> Self {
        Money(self.0 * qty as i64)
    }
}

/// Multiplication by i64.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units() {
        let money = Money::from_units(1500);
        assert_eq!(money.units(), 1500);
    }

    #[test]
    fn test_grouping() {
        assert_eq!(Money::from_units(0).grouped(), "0");
        assert_eq!(Money::from_units(999).grouped(), "999");
        assert_eq!(Money::from_units(1500).grouped(), "1,500");
        assert_eq!(Money::from_units(12000).grouped(), "12,000");
        assert_eq!(Money::from_units(250000).grouped(), "250,000");
        assert_eq!(Money::from_units(1234567).grouped(), "1,234,567");
    }

    #[test]
    fn test_grouping_negative() {
        assert_eq!(Money::from_units(-550).grouped(), "-550");
        assert_eq!(Money::from_units(-1500).grouped(), "-1,500");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_units(1500)), "1,500");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_units(1000);
        let b = Money::from_units(500);

        assert_eq!((a + b).units(), 1500);
        assert_eq!((a - b).units(), 500);
        let result: Money = a * 3i64;
        assert_eq!(result.units(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_units(1500);
        assert_eq!(unit_price.multiply_quantity(1).units(), 1500);
        assert_eq!(unit_price.multiply_quantity(4).units(), 6000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [1500, 2000, 800]
            .into_iter()
            .map(Money::from_units)
            .sum();
        assert_eq!(total.units(), 4300);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let positive = Money::from_units(100);
        assert!(positive.is_positive());

        let negative = Money::from_units(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().units(), 100);
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Money::from_units(1500)).unwrap();
        assert_eq!(json, "1500");

        let back: Money = serde_json::from_str("1500").unwrap();
        assert_eq!(back, Money::from_units(1500));
    }
}
