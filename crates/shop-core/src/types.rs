//! # Domain Types
//!
//! Core domain types used throughout the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    TaxRate      │   │  DiscountRate   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  bps (u32)      │   │  bps (u32)      │       │
//! │  │  name           │   │  800 = 8%       │   │  tiered by      │       │
//! │  │  price_cents    │   └─────────────────┘   │  subtotal       │       │
//! │  │  category       │                         └─────────────────┘       │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Product Id
// =============================================================================

/// Catalog-assigned product number, as typed at the menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 800 bps = 8% sales tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }
}

// =============================================================================
// Discount Rate
// =============================================================================

/// Subtotal brackets, highest first. A bracket applies when the subtotal is
/// strictly greater than its threshold.
const DISCOUNT_TIERS: [(Money, DiscountRate); 3] = [
    (Money::from_major_minor(10_000, 0), DiscountRate(2000)),
    (Money::from_major_minor(5_000, 0), DiscountRate(1000)),
    (Money::from_major_minor(2_000, 0), DiscountRate(500)),
];

/// Whole-cart discount rate in basis points.
///
/// ## Tier Table
/// ```text
/// ┌──────────────────────────────┬──────────┐
/// │  subtotal                    │ discount │
/// ├──────────────────────────────┼──────────┤
/// │  > $10000                    │   20%    │
/// │  > $5000   and ≤ $10000      │   10%    │
/// │  > $2000   and ≤ $5000       │    5%    │
/// │  ≤ $2000                     │    0%    │
/// └──────────────────────────────┴──────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscountRate(u32);

impl DiscountRate {
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        DiscountRate(bps)
    }

    #[inline]
    pub const fn zero() -> Self {
        DiscountRate(0)
    }

    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Picks the discount tier for a subtotal.
    ///
    /// ## Example
    /// ```rust
    /// use shop_core::money::Money;
    /// use shop_core::types::DiscountRate;
    ///
    /// assert_eq!(DiscountRate::for_subtotal(Money::from_cents(200_000)).bps(), 0);
    /// assert_eq!(DiscountRate::for_subtotal(Money::from_cents(200_001)).bps(), 500);
    /// ```
    pub fn for_subtotal(subtotal: Money) -> Self {
        DISCOUNT_TIERS
            .iter()
            .find(|(threshold, _)| subtotal > *threshold)
            .map(|(_, rate)| *rate)
            .unwrap_or_else(DiscountRate::zero)
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        DiscountRate::zero()
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available for sale.
///
/// Products are created once when the catalog is built and never change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique number within the catalog.
    pub id: ProductId,

    /// Display name shown in menus and on the receipt.
    pub name: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Grouping used for recommendations.
    pub category: String,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
    ) -> Self {
        Product {
            id: ProductId::new(id),
            name: name.into(),
            price_cents: price.cents(),
            category: category.into(),
        }
    }

    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

/// Catalog listing format: `1. Laptop - $999.99 (Electronics)`.
impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}. {} - {} ({})",
            self.id,
            self.name,
            self.price(),
            self.category
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
