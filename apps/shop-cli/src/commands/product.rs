//! Catalog listing.

use shop_core::Catalog;
use tracing::debug;

use crate::console::Console;
use crate::error::ShellResult;
use crate::render;

/// Prints every catalog product in catalog order.
pub fn view_products<C: Console + ?Sized>(console: &mut C, catalog: &Catalog) -> ShellResult<()> {
    debug!(products = catalog.len(), "view_products command");
    console.write_line(&render::product_list(catalog.products()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::TextConsole;
    use std::io::Cursor;

    #[test]
    fn test_view_products_lists_catalog_in_order() {
        let catalog = Catalog::builtin();
        let mut console = TextConsole::new(Cursor::new(""), Vec::new());

        view_products(&mut console, &catalog).unwrap();

        let output = String::from_utf8(console.into_output()).unwrap();
        let laptop = output.find("1. Laptop - $999.99 (Electronics)").unwrap();
        let watch = output.find("8. Smartwatch - $199.99 (Wearables)").unwrap();
        assert!(laptop < watch);
        assert!(output.contains("Available Products"));
    }
}
