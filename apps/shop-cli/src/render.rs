//! # Console Rendering
//!
//! Every piece of decorated text the shell prints: banners, the main menu,
//! catalog and cart listings, and the checkout receipt. Functions return
//! strings; the caller decides where they go.

use shop_core::{CartTotals, LineSummary, Product, Receipt, RemovalOutcome};

// =============================================================================
// Prompts and Messages
// =============================================================================

pub const MENU_PROMPT: &str = "\n ENTER CHOICE (1-6) : ";
pub const ADD_ID_PROMPT: &str = "Enter the product ID to add to the cart: ";
pub const QUANTITY_PROMPT: &str = "Enter quantity: ";
pub const ADD_AGAIN_PROMPT: &str = "Do you want to add another product? (yes/no) : ";
pub const REMOVE_ID_PROMPT: &str = "Enter the product ID to remove from the cart: ";
pub const REMOVE_QUANTITY_PROMPT: &str = "Enter the quantity to remove: ";
pub const REMOVE_AGAIN_PROMPT: &str = "\nDo you want to remove another product? (yes/no) : ";

pub const INVALID_OPTION: &str = "Invalid option. Please try again.";
pub const INVALID_PRODUCT_ID: &str = "Invalid input. Please enter a valid product ID.";
pub const INVALID_QUANTITY: &str = "Invalid quantity. Please try again.";
pub const PRODUCT_NOT_FOUND: &str = "Product not found.";
pub const NOT_IN_CART: &str = "Product not found in cart.";
pub const EMPTY_CART: &str = "Your cart is empty.";

const BOX_WIDTH: usize = 34;
const RULE: &str = "----------------------------------";

// =============================================================================
// Building Blocks
// =============================================================================

/// Boxed, centered title.
///
/// ```text
///  ╔══════════════════════════════════╗
///  ║        Available Products        ║
///  ╚══════════════════════════════════╝
/// ```
pub fn banner(title: &str) -> String {
    let bar = "═".repeat(BOX_WIDTH);
    format!(" ╔{bar}╗\n ║{title:^width$}║\n ╚{bar}╝", width = BOX_WIDTH)
}

pub fn welcome(store_name: &str) -> String {
    let rule = "=".repeat(72);
    let line = format!("Welcome to {store_name}!");
    format!("\t{rule}\n\t{line:^72}\n\t{rule}")
}

pub fn main_menu() -> String {
    let bar = "═".repeat(BOX_WIDTH);
    let mut out = format!(
        " ╔{bar}╗\n ║{:^width$}║\n ╠{bar}╣\n",
        "~:~(Shopping Cart)~:~",
        width = BOX_WIDTH
    );

    let entries = [
        "1. View products",
        "2. Add product to cart",
        "3. Remove product from cart",
        "4. View cart",
        "5. Checkout",
        "6. Exit",
    ];
    for entry in entries {
        out.push_str(&format!(" ║ {entry:<width$}║\n", width = BOX_WIDTH - 1));
    }

    out.push_str(&format!(" ╚{bar}╝"));
    out
}

// =============================================================================
// Listings
// =============================================================================

/// `1. Laptop - $999.99 (Electronics)` per product, under a banner.
pub fn product_list(products: &[Product]) -> String {
    let mut out = banner("Available Products");
    out.push('\n');
    for product in products {
        out.push_str(&format!("\n{product}"));
    }
    out
}

/// Cart contents in insertion order, or the empty-cart notice.
pub fn cart_view(lines: &[LineSummary]) -> String {
    let mut out = banner("Items in your cart");
    out.push('\n');

    if lines.is_empty() {
        out.push('\n');
        out.push_str(EMPTY_CART);
        return out;
    }

    for line in lines {
        out.push_str(&format!(
            "\n{} x {} - {}",
            line.name, line.quantity, line.line_total
        ));
    }
    out
}

pub fn added(quantity: i64, name: &str) -> String {
    format!("{quantity}x {name} added to the cart.")
}

pub fn removal(outcome: &RemovalOutcome) -> String {
    match outcome {
        RemovalOutcome::Removed { name, .. } => format!("Removed {name} from the cart."),
        RemovalOutcome::PartiallyRemoved {
            name,
            removed,
            remaining,
            ..
        } => format!("Removed {removed}x {name} from the cart ({remaining} left)."),
        RemovalOutcome::NotFound { .. } => NOT_IN_CART.to_string(),
    }
}

// =============================================================================
// Receipt
// =============================================================================

fn totals_block(totals: &CartTotals) -> String {
    format!(
        "{RULE}\n\
         Subtotal: {}\n\
         Discount ({}%): -{}\n\
         Tax ({}%): {}\n\
         Total: {}\n\
         {RULE}",
        totals.subtotal,
        totals.discount_rate.percentage(),
        totals.discount,
        totals.tax_rate.percentage(),
        totals.tax,
        totals.total,
    )
}

/// Full checkout printout: items, totals, timestamp, recommendations.
pub fn receipt(receipt: &Receipt) -> String {
    let mut out = cart_view(&receipt.lines);

    out.push_str(&format!(
        "\n\n{}\n\n{}\n\nReceipt: {}\nCheckout Date and Time: {}\nThank you for your purchase!",
        banner("Proceeding to checkout"),
        totals_block(&receipt.totals),
        receipt.receipt_id,
        receipt.checked_out_at.format("%Y-%m-%d %H:%M:%S UTC"),
    ));

    out.push_str("\n\nBased on your cart, we recommend:");
    for product in &receipt.recommendations {
        out.push_str(&format!(
            "\n{} - {} ({})",
            product.name,
            product.price(),
            product.category
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shop_core::{Money, ProductId};

    #[test]
    fn test_banner_is_centered() {
        let text = banner("Available Products");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], " ║        Available Products        ║");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }

    #[test]
    fn test_main_menu_lists_all_choices() {
        let menu = main_menu();
        for n in 1..=6 {
            assert!(menu.contains(&format!(" {n}. ")), "missing entry {n}");
        }
        let widths: Vec<usize> = menu.lines().map(|l| l.chars().count()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "ragged menu: {widths:?}");
    }

    #[test]
    fn test_cart_view() {
        assert!(cart_view(&[]).ends_with(EMPTY_CART));

        let lines = vec![LineSummary {
            product_id: ProductId::new(6),
            name: "Mouse".to_string(),
            unit_price: Money::from_cents(2999),
            quantity: 2,
            line_total: Money::from_cents(5998),
        }];
        assert!(cart_view(&lines).ends_with("Mouse x 2 - $59.98"));
    }

    #[test]
    fn test_removal_messages() {
        let removed = RemovalOutcome::Removed {
            product_id: ProductId::new(1),
            name: "Laptop".to_string(),
            quantity: 2,
        };
        assert_eq!(removal(&removed), "Removed Laptop from the cart.");

        let partial = RemovalOutcome::PartiallyRemoved {
            product_id: ProductId::new(1),
            name: "Laptop".to_string(),
            removed: 1,
            remaining: 1,
        };
        assert_eq!(removal(&partial), "Removed 1x Laptop from the cart (1 left).");

        let missing = RemovalOutcome::NotFound {
            product_id: ProductId::new(1),
        };
        assert_eq!(removal(&missing), NOT_IN_CART);
    }

    #[test]
    fn test_receipt_layout() {
        use chrono::{DateTime, Utc};
        use shop_core::{Cart, Catalog};

        let now = DateTime::parse_from_rfc3339("2026-03-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        let catalog = Catalog::builtin();
        let mut cart = Cart::new(now);
        cart.add_product(catalog.get(ProductId::new(8)).unwrap(), 1).unwrap();
        let done = cart.checkout(&catalog, now).into_receipt().unwrap();

        let text = receipt(&done);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines.contains(&"Smartwatch x 1 - $199.99"));
        assert!(lines.contains(&"Subtotal: $199.99"));
        assert!(lines.contains(&"Tax (8%): $16.00"));
        assert!(lines.contains(&"Total: $215.99"));
        assert!(lines.contains(&"Checkout Date and Time: 2026-03-01 12:00:00 UTC"));
        assert_eq!(lines.last(), Some(&"Smartwatch - $199.99 (Wearables)"));
    }

    #[test]
    fn test_product_list() {
        let products = vec![Product::new(1, "Laptop", Money::from_cents(99_999), "Electronics")];
        assert!(product_list(&products).ends_with("1. Laptop - $999.99 (Electronics)"));
    }
}
