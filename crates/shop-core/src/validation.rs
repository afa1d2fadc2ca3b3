//! # Validation Module
//!
//! Input validation utilities for the catalog and cart.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console Shell (shop-cli)                                     │
//! │  ├── Text → integer parsing                                            │
//! │  └── Re-prompt on malformed input                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Quantities must be positive                                       │
//! │  └── Catalog entries must be well formed                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Cart invariants (cart.rs)                                    │
//! │  └── One item per product, quantity ≥ 1                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use shop_core::validation::validate_quantity;
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    validate_label("name", name, 200)
}

/// Validates a product category.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
pub fn validate_category(category: &str) -> ValidationResult<()> {
    validate_label("category", category, 100)
}

fn validate_label(field: &str, value: &str, max: i64) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() as i64 > max {
        return Err(ValidationError::OutOfRange {
            field: format!("{field} length"),
            min: 1,
            max,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// There is no upper bound: the shop does not track inventory.
///
/// ## User Workflow
/// ```text
/// User enters quantity: 5
///      │
///      ▼
/// validate_quantity(5) ← THIS FUNCTION
///      │
///      ├── qty <= 0? → Error: "quantity must be positive"
///      │
///      └── OK → Proceed with add_product / remove_product
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
///
/// ## Example
/// ```rust
/// use shop_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(99_999).is_ok()); // $999.99
/// assert!(validate_price_cents(0).is_ok());      // Free item
/// assert!(validate_price_cents(-100).is_err());  // Invalid
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a cart lifetime in minutes.
pub fn validate_cart_lifetime_minutes(minutes: i64) -> ValidationResult<()> {
    // Upper bound keeps `now + lifetime` inside chrono's representable range.
    const MAX_MINUTES: i64 = 60 * 24 * 365;

    if minutes <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "cart lifetime".to_string(),
        });
    }

    if minutes > MAX_MINUTES {
        return Err(ValidationError::OutOfRange {
            field: "cart lifetime".to_string(),
            min: 1,
            max: MAX_MINUTES,
        });
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates every field of a catalog product.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_category(&product.category)?;
    validate_price_cents(product.price_cents)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Laptop Bag").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_category() {
        assert!(validate_category("Electronics").is_ok());
        assert_eq!(
            validate_category(""),
            Err(ValidationError::Required {
                field: "category".to_string()
            })
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(30).is_ok());
        assert!(validate_quantity(100_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(1099).is_ok());
        assert!(validate_price_cents(-100).is_err());
    }

    #[test]
    fn test_validate_cart_lifetime_minutes() {
        assert!(validate_cart_lifetime_minutes(30).is_ok());
        assert!(validate_cart_lifetime_minutes(0).is_err());
        assert!(validate_cart_lifetime_minutes(-5).is_err());
        assert!(validate_cart_lifetime_minutes(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_product() {
        let ok = Product::new(1, "Mouse", Money::from_cents(2999), "Accessories");
        assert!(validate_product(&ok).is_ok());

        let mut bad = ok.clone();
        bad.price_cents = -1;
        assert!(validate_product(&bad).is_err());

        let mut unnamed = ok;
        unnamed.name = String::new();
        assert!(validate_product(&unnamed).is_err());
    }
}
