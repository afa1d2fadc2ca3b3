//! # Menu Commands
//!
//! One function per main-menu entry. Each takes the console plus whatever
//! state the entry needs and returns once the entry's flow is finished.
//!
//! ```text
//! ┌──────┬──────────────────────────┬─────────────────────────────┐
//! │ Menu │ Command                  │ Module                      │
//! ├──────┼──────────────────────────┼─────────────────────────────┤
//! │  1   │ view_products            │ product.rs                  │
//! │  2   │ add_products (loop)      │ cart.rs                     │
//! │  3   │ remove_products (loop)   │ cart.rs                     │
//! │  4   │ view_cart                │ cart.rs                     │
//! │  5   │ checkout                 │ checkout.rs                 │
//! └──────┴──────────────────────────┴─────────────────────────────┘
//! ```

pub mod cart;
pub mod checkout;
pub mod product;

pub use cart::{add_products, remove_products, view_cart};
pub use checkout::checkout;
pub use product::view_products;
