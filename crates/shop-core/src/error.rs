//! # Error Types
//!
//! Domain-specific error types for shop-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shop-core errors (this file)                                          │
//! │  ├── CoreError        - Cart and catalog rule violations               │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shop-cli errors (separate crate)                                      │
//! │  └── ShellError       - Console I/O, configuration, catalog files      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ShellError → printed message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing here is fatal. Every variant is a recoverable outcome that the
//! shell reports and then returns to the menu.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Lookup or removal target is absent.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Quantity is zero or negative.
    ///
    /// ## When This Occurs
    /// - Adding `0` or `-3` of a product
    /// - Removing a non-positive quantity
    ///
    /// The cart is left untouched.
    #[error("Invalid quantity {0}: must be at least 1")]
    InvalidQuantity(i64),

    /// Adding would overflow the stored quantity.
    #[error("Quantity for product {product_id} would overflow")]
    QuantityOverflow { product_id: ProductId },

    /// Checkout attempted after the cart expiry time.
    #[error("Your cart has expired. Please start a new order.")]
    CartExpired,

    /// Checkout attempted with no items.
    #[error("Your cart is empty.")]
    CartEmpty,

    /// Two catalog entries share the same id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(ProductId),

    /// Catalog data could not be parsed.
    #[error("Invalid catalog data: {0}")]
    InvalidCatalog(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation before business logic runs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value is not a well-formed number.
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::ProductNotFound(ProductId::new(42));
        assert_eq!(err.to_string(), "Product not found: 42");

        let err = CoreError::InvalidQuantity(-2);
        assert_eq!(err.to_string(), "Invalid quantity -2: must be at least 1");

        assert_eq!(
            CoreError::CartExpired.to_string(),
            "Your cart has expired. Please start a new order."
        );
        assert_eq!(CoreError::CartEmpty.to_string(), "Your cart is empty.");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::NotANumber {
            field: "quantity".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be a whole number, got 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
