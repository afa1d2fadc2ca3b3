//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A 5% discount on $2999.97 is $149.9985. Floats drift; we round       │
//! │  explicitly, once, to the cent:                                         │
//! │    299997 cents × 500 bps → 15000 cents ($150.00)                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::money::Money;
//!
//! let price = Money::from_cents(1099); // $10.99
//!
//! let doubled = price * 2;                    // $21.98
//! let total = price + Money::from_cents(500); // $15.99
//! assert_eq!(doubled.cents(), 2198);
//! assert_eq!(total.to_string(), "$15.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use crate::types::{DiscountRate, TaxRate};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: subtraction never needs a checked path
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money Flows
/// ```text
/// Product.price ──► CartItem.line_total ──► Cart.subtotal
///                                               │
///                        ┌──────────────────────┤
///                        ▼                      ▼
///                  Cart.discount ──────► Cart.tax ──► Cart.total
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from dollars and cents.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// assert_eq!(Money::from_major_minor(999, 99).cents(), 99_999);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculates tax on this amount, rounded half-up to the cent.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::types::TaxRate;
    ///
    /// let taxable = Money::from_cents(285_000); // $2850.00
    /// let tax = taxable.calculate_tax(TaxRate::from_bps(800));
    /// assert_eq!(tax.cents(), 22_800); // $228.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        self.portion_bps(rate.bps())
    }

    /// Calculates the discount amount (not the discounted price) at `rate`.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::types::DiscountRate;
    ///
    /// let subtotal = Money::from_cents(300_000); // $3000.00
    /// let discount = subtotal.calculate_discount(DiscountRate::from_bps(500));
    /// assert_eq!(discount.cents(), 15_000); // $150.00
    /// ```
    pub fn calculate_discount(&self, rate: DiscountRate) -> Money {
        self.portion_bps(rate.bps())
    }

    /// Multiplies money by a quantity.
    ///
    /// Unchecked: callers hold amounts already proven to fit, see
    /// `checked_multiply_quantity`.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a quantity, `None` on overflow.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    ///
    /// let laptop = Money::from_cents(99_999);
    /// assert_eq!(laptop.checked_multiply_quantity(3), Some(Money::from_cents(299_997)));
    /// assert_eq!(laptop.checked_multiply_quantity(100_000_000_000_000), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, `None` on overflow.
    #[inline]
    pub const fn checked_add(self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    // i128 keeps `amount * bps` from overflowing on large carts.
    // (amount * bps + 5000) / 10000 rounds half-up for non-negative amounts.
    fn portion_bps(&self, bps: u32) -> Money {
        let cents = (self.0 as i128 * bps as i128 + 5000) / 10000;
        Money(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money as `$1234.56`, the format printed on receipts.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
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
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "$5.00");
        assert_eq!(format!("{}", Money::from_cents(307_800)), "$3078.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
        assert_eq!(a.multiply_quantity(30).cents(), 30_000);

        let mut c = a;
        c += b;
        assert_eq!(c.cents(), 1500);
    }

    #[test]
    fn test_checked_arithmetic() {
        let laptop = Money::from_cents(99_999);
        assert_eq!(
            laptop.checked_multiply_quantity(30),
            Some(Money::from_cents(2_999_970))
        );
        assert_eq!(laptop.checked_multiply_quantity(100_000_000_000_000), None);

        let near_max = Money::from_cents(i64::MAX - 1);
        assert_eq!(near_max.checked_add(Money::from_cents(1)), Some(Money::from_cents(i64::MAX)));
        assert_eq!(near_max.checked_add(Money::from_cents(2)), None);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 5].into_iter().map(Money::from_cents).sum();
        assert_eq!(total.cents(), 355);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_tax_calculation_basic() {
        let amount = Money::from_cents(1000);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(800)).cents(), 80);
    }

    #[test]
    fn test_tax_calculation_rounds_half_up() {
        // $10.06 * 8% = 80.48 cents → 80, $10.07 * 8% = 80.56 cents → 81
        let rate = TaxRate::from_bps(800);
        assert_eq!(Money::from_cents(1006).calculate_tax(rate).cents(), 80);
        assert_eq!(Money::from_cents(1007).calculate_tax(rate).cents(), 81);

        // 1 cent * 50% = 0.5 cents → 1 cent
        let cent = Money::from_cents(1);
        assert_eq!(cent.calculate_tax(TaxRate::from_bps(5000)).cents(), 1);

        // 1 cent * 8% = 0.08 cents → 0 cents
        assert_eq!(cent.calculate_tax(TaxRate::from_bps(800)).cents(), 0);
    }

    #[test]
    fn test_discount_calculation() {
        let subtotal = Money::from_cents(299_997); // $2999.97
        let discount = subtotal.calculate_discount(DiscountRate::from_bps(500));
        // $149.9985 → $150.00
        assert_eq!(discount.cents(), 15_000);

        assert!(subtotal
            .calculate_discount(DiscountRate::zero())
            .is_zero());
    }

    #[test]
    fn test_large_amounts_do_not_overflow() {
        let big = Money::from_cents(i64::MAX / 10);
        let tax = big.calculate_tax(TaxRate::from_bps(800));
        assert!(tax.cents() > 0);
    }
}
