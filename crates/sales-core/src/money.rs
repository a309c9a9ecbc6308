//! # Money Module
//!
//! Provides the `Money` type used for the rounded amounts in a report.
//!
//! ## Where Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  LINE ITEM                                                              │
//! │    revenue strategy → f64 ──► round_to_cents() ──► seller.revenue += …  │
//! │                                                                         │
//! │  SELLER (after ranking)                                                 │
//! │    revenue / profit / bonus (f64) ──► Money::from_amount() ──► report   │
//! │                                                                         │
//! │  Sums are NEVER re-rounded in between                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rounding Rule
//! Half away from zero at two decimals: `1.235 → 1.24`, `-1.235 → -1.24`.
//! The rule applies to the binary value actually held by the `f64`, so
//! `1.005` (stored as `1.00499…`) rounds to `1.00`.
//!
//! ## Usage
//! ```rust
//! use sales_core::money::Money;
//!
//! let revenue = Money::from_amount(179.999);
//! assert_eq!(revenue.cents(), 18000);
//! assert_eq!(revenue.to_string(), "180.00");
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Rounds an amount to two decimal places, half away from zero.
///
/// ## Example
/// ```rust
/// use sales_core::money::round_to_cents;
///
/// assert_eq!(round_to_cents(12.345), 12.35);
/// assert_eq!(round_to_cents(25.5 * 0.15), 3.82);
/// assert_eq!(round_to_cents(180.0), 180.0);
/// ```
#[inline]
pub fn round_to_cents(amount: f64) -> f64 {
    to_cents(amount) as f64 / 100.0
}

/// Rounds the exact binary value of `amount` to whole cents.
///
/// Scaling by 100 in `f64` first would round the product, turning
/// `3.8249999999999997` into a tie. The decimal path keeps every digit the
/// `f64` actually holds. Values outside the `Decimal` range fall back to
/// the scaled float.
fn to_cents(amount: f64) -> i64 {
    Decimal::from_f64_retain(amount)
        .map(|exact| exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|rounded| rounded.checked_mul(Decimal::ONE_HUNDRED))
        .and_then(|cents| cents.to_i64())
        .unwrap_or_else(|| (amount * 100.0).round() as i64)
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// Serialized as a plain decimal number (`180.0`, `12.34`) so report
/// consumers see the two-decimal amount, not cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from a decimal amount, rounding to cents.
    ///
    /// ## Example
    /// ```rust
    /// use sales_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(12.345).cents(), 1235);
    /// assert_eq!(Money::from_amount(-0.005).cents(), -1);
    /// assert_eq!(Money::from_amount(1.005).cents(), 100);
    /// ```
    #[inline]
    pub fn from_amount(amount: f64) -> Self {
        Money(to_cents(amount))
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the value as a decimal amount.
    #[inline]
    pub fn amount(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Fixed two-decimal rendering, no currency symbol or grouping.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.cents_part())
    }
}

impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.amount())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = f64::deserialize(deserializer)?;
        Ok(Money::from_amount(amount))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
