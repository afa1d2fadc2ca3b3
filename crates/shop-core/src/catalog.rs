//! # Product Catalog
//!
//! The fixed, read-only set of purchasable products.
//!
//! A catalog is built once at startup, validated, and then only read. Carts
//! borrow products from it, so it must outlive every cart that references it.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_product;

/// Read-only list of products in display order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate ids and malformed entries.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id) {
                return Err(CoreError::DuplicateProductId(product.id));
            }
        }

        Ok(Catalog { products })
    }

    /// Parses a JSON array of products and validates it like [`Catalog::new`].
    ///
    /// ## Format
    /// ```json
    /// [
    ///   { "id": 1, "name": "Laptop", "price_cents": 99999, "category": "Electronics" }
    /// ]
    /// ```
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> =
            serde_json::from_str(json).map_err(|e| CoreError::InvalidCatalog(e.to_string()))?;
        Catalog::new(products)
    }

    /// The storefront's standard eight products.
    pub fn builtin() -> Self {
        let price = Money::from_major_minor;
        Catalog {
            products: vec![
                Product::new(1, "Laptop", price(999, 99), "Electronics"),
                Product::new(2, "Smartphone", price(599, 99), "Electronics"),
                Product::new(3, "Headphones", price(199, 99), "Electronics"),
                Product::new(4, "Monitor", price(299, 99), "Electronics"),
                Product::new(5, "Keyboard", price(49, 99), "Accessories"),
                Product::new(6, "Mouse", price(29, 99), "Accessories"),
                Product::new(7, "Laptop Bag", price(49, 99), "Accessories"),
                Product::new(8, "Smartwatch", price(199, 99), "Wearables"),
            ],
        }
    }

    /// Looks up a product by id. Absence is `None`, never an error.
    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Like [`Catalog::find_by_id`], for callers that want an error to propagate.
    pub fn get(&self, id: ProductId) -> CoreResult<&Product> {
        self.find_by_id(id).ok_or(CoreError::ProductNotFound(id))
    }

    /// Products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
