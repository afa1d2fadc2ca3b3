//! # shop-core: Pure Business Logic for the Shop Cart
//!
//! This crate is the **heart** of the shop simulator. It contains the catalog,
//! the cart engine and all pricing rules as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop Cart Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Console Shell (shop-cli)                     │   │
//! │  │    Menu ──► Add/Remove prompts ──► View cart ──► Checkout       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ plain function calls                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   cart    │  │  catalog  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │  lookup   │  │   │
//! │  │   │  TaxRate  │  │  rounding │  │  Receipt  │  │  by id    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, ProductId, TaxRate, DiscountRate)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - Read-only product catalog
//! - [`cart`] - Cart engine: aggregation, pricing, expiry, checkout
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use shop_core::{Cart, Catalog, CheckoutOutcome, ProductId};
//!
//! let catalog = Catalog::builtin();
//! let now = Utc::now();
//! let mut cart = Cart::new(now);
//!
//! let laptop = catalog.find_by_id(ProductId::new(1)).unwrap();
//! cart.add_product(laptop, 3).unwrap();
//!
//! // 3 x $999.99 = $2999.97, 5% tier applies
//! assert_eq!(cart.subtotal().cents(), 299_997);
//! assert_eq!(cart.discount_amount().cents(), 15_000);
//!
//! match cart.checkout(&catalog, now) {
//!     CheckoutOutcome::Success(receipt) => assert_eq!(receipt.lines.len(), 1),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! assert!(cart.is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem, CartTotals, CheckoutOutcome, LineSummary, Receipt, RemovalOutcome};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sales tax applied to every cart, in basis points (800 = 8%).
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(800);

/// How long a cart stays valid after it is created, in minutes.
pub const DEFAULT_CART_LIFETIME_MINUTES: i64 = 30;
