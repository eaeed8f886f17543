//! # Validation Module
//!
//! The rules a candidate item must pass before the store accepts it.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BasketStore::add(item)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  validate_item(item) ← THIS MODULE                                      │
//! │       │                                                                 │
//! │       ├── name blank?       → NameRequired         (stop)              │
//! │       ├── price <= 0?       → PriceNotPositive     (stop)              │
//! │       ├── quantity <= 0?    → QuantityNotPositive  (stop)              │
//! │       │                                                                 │
//! │       └── OK → item appended                                           │
//! │                                                                         │
//! │  Fail-fast: only the first broken rule is reported.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Input arriving over the network additionally goes through
//! [`validate_input`], which applies the same rules and then the upper
//! limits. The store itself never rejects a large value; its arithmetic
//! saturates instead.

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::BasketItem;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Largest unit price accepted from user input ($1,000,000,000.00).
pub const MAX_UNIT_PRICE: Money = Money::from_major(1_000_000_000);

/// Largest quantity accepted from user input.
///
/// `MAX_UNIT_PRICE * MAX_QUANTITY` is 10^17 cents, well inside i64.
pub const MAX_QUANTITY: i64 = 1_000_000;

/// Validates a product name: non-empty once surrounding whitespace is
/// trimmed.
///
/// ## Example
/// ```rust
/// use basket_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Rice").is_ok());
/// assert!(validate_item_name("").is_err());
/// assert!(validate_item_name(" \t ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::NameRequired);
    }

    Ok(())
}

/// Validates a unit price: strictly greater than zero.
///
/// ## Example
/// ```rust
/// use basket_core::money::Money;
/// use basket_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_cents(1)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_err());
/// assert!(validate_unit_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::PriceNotPositive);
    }

    Ok(())
}

/// Validates a quantity: strictly greater than zero.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::QuantityNotPositive);
    }

    Ok(())
}

/// Runs every item rule in order, stopping at the first failure.
pub fn validate_item(item: &BasketItem) -> ValidationResult<()> {
    validate_item_name(&item.name)?;
    validate_unit_price(item.unit_price)?;
    validate_quantity(item.quantity)?;
    Ok(())
}

/// [`validate_item`] followed by the upper input limits.
///
/// ## Example
/// ```rust
/// use basket_core::validation::{validate_input, MAX_UNIT_PRICE};
/// use basket_core::{BasketItem, CoreError, Money};
///
/// let item = BasketItem::new("Yacht", Money::from_cents(i64::MAX / 2), 2);
/// assert!(matches!(
///     validate_input(&item),
///     Err(CoreError::PriceTooLarge { max }) if max == MAX_UNIT_PRICE
/// ));
/// ```
pub fn validate_input(item: &BasketItem) -> CoreResult<()> {
    validate_item(item)?;

    if item.unit_price > MAX_UNIT_PRICE {
        return Err(CoreError::PriceTooLarge {
            max: MAX_UNIT_PRICE,
        });
    }
    if item.quantity > MAX_QUANTITY {
        return Err(CoreError::QuantityTooLarge { max: MAX_QUANTITY });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Rice").is_ok());
        assert!(validate_item_name("  Beans  ").is_ok());

        assert_eq!(validate_item_name(""), Err(ValidationError::NameRequired));
        assert_eq!(validate_item_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_item_name("\n\t"), Err(ValidationError::NameRequired));
    }

    #[test]
    fn test_validate_unit_price() {
        assert!(validate_unit_price(Money::from_cents(1)).is_ok());
        assert!(validate_unit_price(Money::from_major(5000)).is_ok());

        assert_eq!(
            validate_unit_price(Money::zero()),
            Err(ValidationError::PriceNotPositive)
        );
        assert_eq!(
            validate_unit_price(Money::from_major(-100)),
            Err(ValidationError::PriceNotPositive)
        );
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());

        assert_eq!(validate_quantity(0), Err(ValidationError::QuantityNotPositive));
        assert_eq!(validate_quantity(-5), Err(ValidationError::QuantityNotPositive));
    }

    #[test]
    fn test_validate_item_reports_first_failure_only() {
        // Everything is wrong: the name wins
        let item = BasketItem::new(" ", Money::from_cents(-1), -1);
        assert_eq!(validate_item(&item), Err(ValidationError::NameRequired));

        // Price and quantity wrong: price wins
        let item = BasketItem::new("X", Money::zero(), 0);
        assert_eq!(validate_item(&item), Err(ValidationError::PriceNotPositive));

        let item = BasketItem::new("X", Money::from_major(100), -5);
        assert_eq!(validate_item(&item), Err(ValidationError::QuantityNotPositive));

        let item = BasketItem::new("X", Money::from_major(100), 5);
        assert_eq!(validate_item(&item), Ok(()));
    }

    #[test]
    fn test_validate_input_limits() {
        let at_limit = BasketItem::new("X", MAX_UNIT_PRICE, MAX_QUANTITY);
        assert!(validate_input(&at_limit).is_ok());
        assert_eq!(
            at_limit.subtotal().cents(),
            MAX_UNIT_PRICE.cents() * MAX_QUANTITY
        );

        let price = BasketItem::new("X", Money::from_cents(5_000_000_000_000_000_000), 2);
        assert!(matches!(
            validate_input(&price),
            Err(CoreError::PriceTooLarge { .. })
        ));

        let qty = BasketItem::new("X", Money::from_major(1), MAX_QUANTITY + 1);
        assert!(matches!(
            validate_input(&qty),
            Err(CoreError::QuantityTooLarge { max: MAX_QUANTITY })
        ));
    }

    #[test]
    fn test_validate_input_keeps_rule_order() {
        // A blank name is still reported before an oversized price
        let item = BasketItem::new("", Money::from_cents(i64::MAX), 1);
        assert!(matches!(
            validate_input(&item),
            Err(CoreError::Validation(ValidationError::NameRequired))
        ));

        let item = BasketItem::new("X", Money::from_cents(-1), i64::MAX);
        assert!(matches!(
            validate_input(&item),
            Err(CoreError::Validation(ValidationError::PriceNotPositive))
        ));
    }
}
