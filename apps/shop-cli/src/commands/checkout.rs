//! # Checkout Command
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  cart.checkout(catalog, now)                                            │
//! │     │                                                                   │
//! │     ├── Expired ──► "Your cart has expired..."  (cart kept as is)       │
//! │     ├── Empty ────► "Your cart is empty."                               │
//! │     └── Success ──► receipt printed, cart now empty                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use shop_core::{Cart, Catalog};
use tracing::{info, warn};

use crate::console::Console;
use crate::error::ShellResult;
use crate::render;

/// Checks the cart out at `now` and prints the receipt or the refusal.
pub fn checkout<C: Console + ?Sized>(
    console: &mut C,
    catalog: &Catalog,
    cart: &mut Cart<'_>,
    now: DateTime<Utc>,
) -> ShellResult<()> {
    match cart.checkout(catalog, now).into_receipt() {
        Ok(receipt) => {
            info!(
                receipt_id = %receipt.receipt_id,
                items = receipt.totals.item_count,
                total = %receipt.totals.total,
                "Checkout completed"
            );
            console.write_line(&render::receipt(&receipt))?;
        }
        Err(err) => {
            warn!(error = %err, expires_at = %cart.expires_at(), "Checkout refused");
            console.write_line(&err.to_string())?;
        }
    }
    Ok(())
}
