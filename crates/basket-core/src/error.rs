//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── ValidationError  - Rejected by BasketStore::add                   │
//! │  └── CoreError        - Validation + unparseable or oversized input    │
//! │                                                                         │
//! │  basket-report errors (separate crate)                                 │
//! │  └── ReportError      - PDF generation failures                        │
//! │                                                                         │
//! │  basket-web errors (in app)                                            │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Flash / JSON body      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. Each variant maps to one fixed, user-facing reason

use thiserror::Error;

use crate::money::{Money, ParseMoneyError};

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons `BasketStore::add` rejects an item.
///
/// Checked in declaration order; the first failing rule wins. A rejected item
/// never changes the store, so the caller only has to fix the input and
/// resubmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The name is empty or only whitespace.
    #[error("name required")]
    NameRequired,

    /// The unit price is zero or negative.
    #[error("price must be positive")]
    PriceNotPositive,

    /// The quantity is zero or negative.
    #[error("quantity must be positive")]
    QuantityNotPositive,
}

impl ValidationError {
    /// Name of the offending form field.
    pub const fn field(&self) -> &'static str {
        match self {
            ValidationError::NameRequired => "name",
            ValidationError::PriceNotPositive => "price",
            ValidationError::QuantityNotPositive => "quantity",
        }
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised while turning raw user input into a stored item.
///
/// Presentation layers parse text fields before calling the store; those
/// parse failures share this type with the store's own validation errors so
/// a handler has a single `?` path.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Price text is not a number with at most two decimals.
    #[error("price has invalid format: {0}")]
    InvalidPrice(#[from] ParseMoneyError),

    /// Quantity text is not a whole number.
    #[error("quantity has invalid format: '{input}'")]
    InvalidQuantity { input: String },

    /// Price is positive but larger than basket arithmetic accepts.
    #[error("price exceeds the maximum of {max}")]
    PriceTooLarge { max: Money },

    /// Quantity is positive but larger than basket arithmetic accepts.
    #[error("quantity exceeds the maximum of {max}")]
    QuantityTooLarge { max: i64 },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
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
    fn test_validation_error_messages() {
        assert_eq!(ValidationError::NameRequired.to_string(), "name required");
        assert_eq!(
            ValidationError::PriceNotPositive.to_string(),
            "price must be positive"
        );
        assert_eq!(
            ValidationError::QuantityNotPositive.to_string(),
            "quantity must be positive"
        );
    }

    #[test]
    fn test_validation_error_fields() {
        assert_eq!(ValidationError::NameRequired.field(), "name");
        assert_eq!(ValidationError::PriceNotPositive.field(), "price");
        assert_eq!(ValidationError::QuantityNotPositive.field(), "quantity");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let core_err: CoreError = ValidationError::NameRequired.into();
        assert!(matches!(
            core_err,
            CoreError::Validation(ValidationError::NameRequired)
        ));
        // Transparent: the reason reaches the user unchanged
        assert_eq!(core_err.to_string(), "name required");
    }

    #[test]
    fn test_invalid_quantity_message() {
        let err = CoreError::InvalidQuantity {
            input: "two".to_string(),
        };
        assert_eq!(err.to_string(), "quantity has invalid format: 'two'");
    }

    #[test]
    fn test_too_large_messages() {
        let err = CoreError::PriceTooLarge {
            max: Money::from_major(1_000_000_000),
        };
        assert_eq!(
            err.to_string(),
            "price exceeds the maximum of $1,000,000,000.00"
        );

        let err = CoreError::QuantityTooLarge { max: 1_000_000 };
        assert_eq!(err.to_string(), "quantity exceeds the maximum of 1000000");
    }
}
