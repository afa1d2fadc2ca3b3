//! # Cart Engine
//!
//! Owns the cart items and derives every price from them on demand.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_product   ┌──────────┐   checkout    ┌──────────┐   │
//! │  │  Empty   │───────────────►│  Active  │──────────────►│  Empty   │   │
//! │  └──────────┘                └──────────┘   (Success)   └──────────┘   │
//! │       ▲                        │      ▲                                 │
//! │       │    remove last item    │      │ add / remove                    │
//! │       └────────────────────────┘      └──────┘                          │
//! │                                                                         │
//! │  Expired is derived from `now > expires_at` and only gates checkout.   │
//! │  An expired checkout leaves the items exactly as they were.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Pricing Pipeline
//! ```text
//! subtotal = Σ price × quantity
//! discount = subtotal × tier(subtotal)          (rounded to the cent)
//! tax      = (subtotal - discount) × 8%         (rounded to the cent)
//! total    = subtotal - discount + tax
//! ```
//! Tax is charged on the discounted amount, never on the raw subtotal.

use std::collections::HashSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{DiscountRate, Product, ProductId, TaxRate};
use crate::validation::validate_quantity;
use crate::{DEFAULT_CART_LIFETIME_MINUTES, SALES_TAX_RATE};

// =============================================================================
// Cart Item
// =============================================================================

/// A product in the cart together with how many of it.
///
/// The product is borrowed from the catalog; the item never outlives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem<'a> {
    product: &'a Product,
    quantity: i64,
}

impl<'a> CartItem<'a> {
    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// Always at least 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Outcomes
// =============================================================================

/// What `remove_product` did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// The item is gone from the cart.
    Removed {
        product_id: ProductId,
        name: String,
        /// Quantity the item held before removal.
        quantity: i64,
    },
    /// Only part of the quantity was taken off.
    PartiallyRemoved {
        product_id: ProductId,
        name: String,
        removed: i64,
        remaining: i64,
    },
    /// No item for that product id; nothing changed.
    NotFound { product_id: ProductId },
}

/// One line of the cart view, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSummary {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub line_total: Money,
}

impl From<&CartItem<'_>> for LineSummary {
    fn from(item: &CartItem<'_>) -> Self {
        LineSummary {
            product_id: item.product.id,
            name: item.product.name.clone(),
            unit_price: item.product.price(),
            quantity: item.quantity,
            line_total: item.line_total(),
        }
    }
}

/// Cart totals snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub discount_rate: DiscountRate,
    pub discount: Money,
    pub tax_rate: TaxRate,
    pub tax: Money,
    pub total: Money,
}

impl From<&Cart<'_>> for CartTotals {
    fn from(cart: &Cart<'_>) -> Self {
        let subtotal = cart.subtotal();
        let discount_rate = DiscountRate::for_subtotal(subtotal);
        let discount = subtotal.calculate_discount(discount_rate);
        let tax = (subtotal - discount).calculate_tax(cart.tax_rate);

        CartTotals {
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            discount_rate,
            discount,
            tax_rate: cart.tax_rate,
            tax,
            total: subtotal - discount + tax,
        }
    }
}

/// Everything printed after a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: Uuid,
    pub checked_out_at: DateTime<Utc>,
    pub lines: Vec<LineSummary>,
    pub totals: CartTotals,
    /// Catalog products sharing a category with anything purchased.
    pub recommendations: Vec<Product>,
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckoutOutcome {
    /// The cart expired; its items are untouched.
    Expired,
    /// Nothing to check out.
    Empty,
    /// Priced, summarized, and cleared.
    Success(Receipt),
}

impl CheckoutOutcome {
    /// Converts the two refusal outcomes into errors.
    ///
    /// ## Example
    /// ```rust
    /// use chrono::Utc;
    /// use shop_core::{Cart, Catalog, CoreError};
    ///
    /// let catalog = Catalog::builtin();
    /// let now = Utc::now();
    /// let mut cart = Cart::new(now);
    ///
    /// let err = cart.checkout(&catalog, now).into_receipt().unwrap_err();
    /// assert_eq!(err, CoreError::CartEmpty);
    /// ```
    pub fn into_receipt(self) -> CoreResult<Receipt> {
        match self {
            CheckoutOutcome::Expired => Err(CoreError::CartExpired),
            CheckoutOutcome::Empty => Err(CoreError::CartEmpty),
            CheckoutOutcome::Success(receipt) => Ok(receipt),
        }
    }
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - Items are unique by product id (adding the same product increases quantity)
/// - Every quantity is ≥ 1 (an item that would drop to 0 is removed)
/// - Items keep insertion order for stable display
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: Vec<CartItem<'a>>,
    tax_rate: TaxRate,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl<'a> Cart<'a> {
    /// Creates an empty cart that expires 30 minutes after `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Cart::with_lifetime(now, Duration::minutes(DEFAULT_CART_LIFETIME_MINUTES))
    }

    /// Creates an empty cart that expires `lifetime` after `now`.
    pub fn with_lifetime(now: DateTime<Utc>, lifetime: Duration) -> Self {
        Cart {
            items: Vec::new(),
            tax_rate: SALES_TAX_RATE,
            created_at: now,
            expires_at: now + lifetime,
        }
    }

    /// Adds a product to the cart or increases its quantity if already present.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: `InvalidQuantity`, cart unchanged
    /// - product already in cart: quantity += `quantity`
    /// - otherwise: appended as a new item
    /// - quantity, line total, subtotal or total would leave `i64`:
    ///   `QuantityOverflow`, cart unchanged
    ///
    /// ## Returns
    /// The item after the change, so callers can report its name and quantity.
    pub fn add_product(&mut self, product: &'a Product, quantity: i64) -> CoreResult<&CartItem<'a>> {
        validate_quantity(quantity).map_err(|_| CoreError::InvalidQuantity(quantity))?;

        let held = self.quantity_of(product.id).unwrap_or(0);
        let new_quantity = held
            .checked_add(quantity)
            .filter(|&q| self.stays_priceable(product, q))
            .ok_or(CoreError::QuantityOverflow {
                product_id: product.id,
            })?;

        let index = match self.position(product.id) {
            Some(index) => {
                self.items[index].quantity = new_quantity;
                index
            }
            None => {
                self.items.push(CartItem {
                    product,
                    quantity: new_quantity,
                });
                self.items.len() - 1
            }
        };

        Ok(&self.items[index])
    }

    /// Takes `quantity` units of a product out of the cart.
    ///
    /// ## Behavior
    /// - quantity ≤ 0: `InvalidQuantity`, nothing removed
    /// - product not in cart: `NotFound`
    /// - quantity ≥ held quantity: item removed entirely
    /// - otherwise: quantity decremented
    pub fn remove_product(&mut self, product_id: ProductId, quantity: i64) -> CoreResult<RemovalOutcome> {
        validate_quantity(quantity).map_err(|_| CoreError::InvalidQuantity(quantity))?;

        let Some(index) = self.position(product_id) else {
            return Ok(RemovalOutcome::NotFound { product_id });
        };

        let item = &mut self.items[index];
        if quantity >= item.quantity {
            let removed = self.items.remove(index);
            return Ok(RemovalOutcome::Removed {
                product_id,
                name: removed.product.name.clone(),
                quantity: removed.quantity,
            });
        }

        item.quantity -= quantity;
        Ok(RemovalOutcome::PartiallyRemoved {
            product_id,
            name: item.product.name.clone(),
            removed: quantity,
            remaining: item.quantity,
        })
    }

    /// Returns (name, quantity, line total) per item, in insertion order.
    pub fn view_summary(&self) -> Vec<LineSummary> {
        self.items.iter().map(LineSummary::from).collect()
    }

    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Current quantity held for a product, if any.
    pub fn quantity_of(&self, product_id: ProductId) -> Option<i64> {
        self.position(product_id).map(|i| self.items[i].quantity)
    }

    /// Returns the number of unique items in the cart.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    // -------------------------------------------------------------------------
    // Pricing
    // -------------------------------------------------------------------------

    /// Σ price × quantity.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Tier selected by the current subtotal.
    pub fn discount_rate(&self) -> DiscountRate {
        DiscountRate::for_subtotal(self.subtotal())
    }

    /// Discount amount (not the rate).
    pub fn discount_amount(&self) -> Money {
        self.totals().discount
    }

    /// Tax on the discounted subtotal.
    pub fn tax_amount(&self) -> Money {
        self.totals().tax
    }

    /// subtotal - discount + tax.
    pub fn total(&self) -> Money {
        self.totals().total
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self)
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// `now > expires_at`. The boundary instant itself is not expired.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Every catalog product whose category appears in the cart, in catalog
    /// order. Products already in the cart are included.
    pub fn recommend_products<'c>(&self, catalog: &'c Catalog) -> Vec<&'c Product> {
        let categories: HashSet<&str> = self
            .items
            .iter()
            .map(|item| item.product.category.as_str())
            .collect();

        if categories.is_empty() {
            return Vec::new();
        }

        catalog
            .products()
            .iter()
            .filter(|product| categories.contains(product.category.as_str()))
            .collect()
    }

    /// Prices, summarizes and clears the cart.
    ///
    /// ## Gates (checked in order)
    /// 1. Expired → `Expired`, cart untouched
    /// 2. No items → `Empty`
    /// 3. Otherwise → `Success(receipt)` and the cart is emptied
    ///
    /// The expiry time is not reset; the cart keeps its original deadline.
    pub fn checkout(&mut self, catalog: &Catalog, now: DateTime<Utc>) -> CheckoutOutcome {
        if self.is_expired(now) {
            return CheckoutOutcome::Expired;
        }

        if self.is_empty() {
            return CheckoutOutcome::Empty;
        }

        let receipt = Receipt {
            receipt_id: Uuid::new_v4(),
            checked_out_at: now,
            lines: self.view_summary(),
            totals: self.totals(),
            recommendations: self
                .recommend_products(catalog)
                .into_iter()
                .cloned()
                .collect(),
        };

        self.items.clear();
        CheckoutOutcome::Success(receipt)
    }

    /// Whether holding `quantity` of `product` keeps every derived amount
    /// (total quantity, line total, subtotal, total) inside `i64`.
    ///
    /// Once an add passes this check, the unchecked arithmetic in
    /// `line_total`, `subtotal` and `CartTotals` cannot overflow; removals
    /// only shrink those amounts.
    fn stays_priceable(&self, product: &Product, quantity: i64) -> bool {
        let id = product.id;
        let others = || self.items.iter().filter(move |i| i.product.id != id);

        let total_quantity = others().try_fold(quantity, |acc, i| acc.checked_add(i.quantity));
        let subtotal = product
            .price()
            .checked_multiply_quantity(quantity)
            .and_then(|line| others().try_fold(line, |acc, i| acc.checked_add(i.line_total())));

        let (Some(_), Some(subtotal)) = (total_quantity, subtotal) else {
            return false;
        };

        let discount = subtotal.calculate_discount(DiscountRate::for_subtotal(subtotal));
        let taxable = subtotal - discount;
        taxable.checked_add(taxable.calculate_tax(self.tax_rate)).is_some()
    }

    fn position(&self, product_id: ProductId) -> Option<usize> {
        self.items.iter().position(|i| i.product.id == product_id)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
