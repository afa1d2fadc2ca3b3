//! # Cart Commands
//!
//! Add, remove and view flows for the console.
//!
//! ## Add / Remove Loops
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add_products                        remove_products                    │
//! │                                                                         │
//! │  ┌─► id? ── bad ──► message, stop     ┌─► id? ── bad ──► message ─┐     │
//! │  │   qty? ─ bad ──► message, stop     │   qty? ─ bad ──► message ─┤     │
//! │  │   cart.add_product                 │   cart.remove_product     │     │
//! │  │   "another? (yes/no)"              │   "another? (yes/no)" ◄───┘     │
//! │  └── yes                              └── yes                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both loops are plain `loop`s; any answer other than `yes` returns to the
//! main menu.

use shop_core::{Cart, Catalog};
use tracing::{debug, warn};

use crate::console::Console;
use crate::error::ShellResult;
use crate::prompt::{ask, is_yes, parse_product_id, parse_quantity};
use crate::render;

// =============================================================================
// Add
// =============================================================================

/// Adds products until the user stops answering `yes`.
///
/// A bad product id, unknown product or bad quantity prints a message and
/// returns straight to the menu.
pub fn add_products<'a, C: Console + ?Sized>(
    console: &mut C,
    catalog: &'a Catalog,
    cart: &mut Cart<'a>,
) -> ShellResult<()> {
    debug!("add_products command");

    loop {
        if !add_one(console, catalog, cart)? {
            return Ok(());
        }

        let answer = ask(console, render::ADD_AGAIN_PROMPT)?;
        if !is_yes(&answer) {
            return Ok(());
        }
    }
}

/// One add round. `false` when input was rejected.
fn add_one<'a, C: Console + ?Sized>(
    console: &mut C,
    catalog: &'a Catalog,
    cart: &mut Cart<'a>,
) -> ShellResult<bool> {
    let raw = ask(console, render::ADD_ID_PROMPT)?;
    let product_id = match parse_product_id(&raw) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "Rejected product id");
            console.write_line(render::INVALID_PRODUCT_ID)?;
            return Ok(false);
        }
    };

    let Some(product) = catalog.find_by_id(product_id) else {
        warn!(%product_id, "Product not in catalog");
        console.write_line(render::PRODUCT_NOT_FOUND)?;
        return Ok(false);
    };

    let raw = ask(console, render::QUANTITY_PROMPT)?;
    let quantity = match parse_quantity(&raw) {
        Ok(quantity) => quantity,
        Err(err) => {
            warn!(error = %err, %product_id, "Rejected quantity");
            console.write_line(render::INVALID_QUANTITY)?;
            return Ok(false);
        }
    };

    match cart.add_product(product, quantity) {
        Ok(item) => {
            debug!(%product_id, added = quantity, in_cart = item.quantity(), "Added to cart");
            console.write_line(&render::added(quantity, &product.name))?;
            Ok(true)
        }
        Err(err) => {
            warn!(error = %err, %product_id, "Add rejected by cart");
            console.write_line(&err.to_string())?;
            Ok(false)
        }
    }
}

// =============================================================================
// Remove
// =============================================================================

/// Removes products until the user stops answering `yes`.
///
/// The "another?" question is asked after every round, including rounds
/// whose input was rejected.
pub fn remove_products<C: Console + ?Sized>(console: &mut C, cart: &mut Cart<'_>) -> ShellResult<()> {
    debug!("remove_products command");

    loop {
        remove_one(console, cart)?;

        let answer = ask(console, render::REMOVE_AGAIN_PROMPT)?;
        if !is_yes(&answer) {
            return Ok(());
        }
    }
}

fn remove_one<C: Console + ?Sized>(console: &mut C, cart: &mut Cart<'_>) -> ShellResult<()> {
    let raw = ask(console, render::REMOVE_ID_PROMPT)?;
    let product_id = match parse_product_id(&raw) {
        Ok(id) => id,
        Err(err) => {
            warn!(error = %err, "Rejected product id");
            console.write_line(render::INVALID_PRODUCT_ID)?;
            return Ok(());
        }
    };

    let raw = ask(console, render::REMOVE_QUANTITY_PROMPT)?;
    let quantity = match parse_quantity(&raw) {
        Ok(quantity) => quantity,
        Err(err) => {
            warn!(error = %err, %product_id, "Rejected quantity");
            console.write_line(render::INVALID_QUANTITY)?;
            return Ok(());
        }
    };

    match cart.remove_product(product_id, quantity) {
        Ok(outcome) => {
            debug!(%product_id, ?outcome, "Remove handled");
            console.write_line(&render::removal(&outcome))?;
        }
        Err(err) => {
            warn!(error = %err, %product_id, "Remove rejected by cart");
            console.write_line(&err.to_string())?;
        }
    }
    Ok(())
}

// =============================================================================
// View
// =============================================================================

/// Prints the cart lines in insertion order.
pub fn view_cart<C: Console + ?Sized>(console: &mut C, cart: &Cart<'_>) -> ShellResult<()> {
    debug!(items = cart.item_count(), "view_cart command");
    console.write_line(&render::cart_view(&cart.view_summary()))?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
