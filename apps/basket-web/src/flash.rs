//! One-shot status banners carried across a redirect.
//!
//! The server keeps no sessions, so a banner travels in the query string of
//! the redirect target as a fixed key: `/?notice=item-added`. Only keys from
//! [`Notice`] are ever shown; free text in the URL is ignored.

use axum::response::Redirect;
use basket_core::validation::{MAX_QUANTITY, MAX_UNIT_PRICE};
use basket_core::{CoreError, ValidationError};
use serde::Deserialize;
use url::form_urlencoded;

/// Banner color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashKind {
    Success,
    Danger,
    Info,
}

impl FlashKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FlashKind::Success => "success",
            FlashKind::Danger => "danger",
            FlashKind::Info => "info",
        }
    }
}

/// Every banner the pages can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    ItemAdded,
    BasketCleared,
    NameRequired,
    PriceNotPositive,
    QuantityNotPositive,
    InvalidPrice,
    InvalidQuantity,
    PriceTooLarge,
    QuantityTooLarge,
}

impl Notice {
    const ALL: [Notice; 9] = [
        Notice::ItemAdded,
        Notice::BasketCleared,
        Notice::NameRequired,
        Notice::PriceNotPositive,
        Notice::QuantityNotPositive,
        Notice::InvalidPrice,
        Notice::InvalidQuantity,
        Notice::PriceTooLarge,
        Notice::QuantityTooLarge,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            Notice::ItemAdded => "item-added",
            Notice::BasketCleared => "basket-cleared",
            Notice::NameRequired => "name-required",
            Notice::PriceNotPositive => "price-not-positive",
            Notice::QuantityNotPositive => "quantity-not-positive",
            Notice::InvalidPrice => "invalid-price",
            Notice::InvalidQuantity => "invalid-quantity",
            Notice::PriceTooLarge => "price-too-large",
            Notice::QuantityTooLarge => "quantity-too-large",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|notice| notice.key() == key)
    }

    pub fn kind(self) -> FlashKind {
        match self {
            Notice::ItemAdded => FlashKind::Success,
            Notice::BasketCleared => FlashKind::Info,
            _ => FlashKind::Danger,
        }
    }

    fn validation(self) -> Option<ValidationError> {
        match self {
            Notice::NameRequired => Some(ValidationError::NameRequired),
            Notice::PriceNotPositive => Some(ValidationError::PriceNotPositive),
            Notice::QuantityNotPositive => Some(ValidationError::QuantityNotPositive),
            _ => None,
        }
    }

    /// Banner text.
    pub fn message(self) -> String {
        if let Some(reason) = self.validation() {
            return format!("Error: {}", reason);
        }

        match self {
            Notice::ItemAdded => "Item added successfully".to_string(),
            Notice::BasketCleared => "Basket cleared successfully".to_string(),
            Notice::InvalidPrice => "Error: price has invalid format".to_string(),
            Notice::InvalidQuantity => "Error: quantity has invalid format".to_string(),
            Notice::PriceTooLarge => format!(
                "Error: {}",
                CoreError::PriceTooLarge {
                    max: MAX_UNIT_PRICE
                }
            ),
            Notice::QuantityTooLarge => format!(
                "Error: {}",
                CoreError::QuantityTooLarge { max: MAX_QUANTITY }
            ),
            _ => String::new(),
        }
    }

    /// Form field to mark invalid, if the notice is about one.
    pub fn field(self) -> Option<&'static str> {
        if let Some(reason) = self.validation() {
            return Some(reason.field());
        }

        match self {
            Notice::InvalidPrice | Notice::PriceTooLarge => Some("price"),
            Notice::InvalidQuantity | Notice::QuantityTooLarge => Some("quantity"),
            _ => None,
        }
    }

    /// `path` with this notice appended as a query parameter.
    pub fn location(self, path: &str) -> String {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("notice", self.key())
            .finish();
        format!("{}?{}", path, query)
    }

    /// 303 redirect to `path` carrying this notice.
    pub fn redirect(self, path: &str) -> Redirect {
        Redirect::to(&self.location(path))
    }
}

impl From<&CoreError> for Notice {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::Validation(ValidationError::NameRequired) => Notice::NameRequired,
            CoreError::Validation(ValidationError::PriceNotPositive) => Notice::PriceNotPositive,
            CoreError::Validation(ValidationError::QuantityNotPositive) => {
                Notice::QuantityNotPositive
            }
            CoreError::InvalidPrice(_) => Notice::InvalidPrice,
            CoreError::InvalidQuantity { .. } => Notice::InvalidQuantity,
            CoreError::PriceTooLarge { .. } => Notice::PriceTooLarge,
            CoreError::QuantityTooLarge { .. } => Notice::QuantityTooLarge,
        }
    }
}

/// Query parameters a notice arrives in.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
}

impl FlashQuery {
    /// Unknown or missing keys show no banner.
    pub fn into_notice(self) -> Option<Notice> {
        self.notice.as_deref().and_then(Notice::from_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::ParseMoneyError;

    #[test]
    fn test_location_carries_key_only() {
        assert_eq!(Notice::ItemAdded.location("/"), "/?notice=item-added");
        assert_eq!(
            Notice::NameRequired.location("/"),
            "/?notice=name-required"
        );
    }

    #[test]
    fn test_keys_round_trip() {
        for notice in Notice::ALL {
            assert_eq!(Notice::from_key(notice.key()), Some(notice));
            assert!(!notice.message().is_empty());
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(Notice::ItemAdded.message(), "Item added successfully");
        assert_eq!(Notice::BasketCleared.message(), "Basket cleared successfully");
        assert_eq!(Notice::NameRequired.message(), "Error: name required");
        assert_eq!(
            Notice::PriceNotPositive.message(),
            "Error: price must be positive"
        );
        assert_eq!(
            Notice::PriceTooLarge.message(),
            "Error: price exceeds the maximum of $1,000,000,000.00"
        );
    }

    #[test]
    fn test_kinds_and_fields() {
        assert_eq!(Notice::ItemAdded.kind(), FlashKind::Success);
        assert_eq!(Notice::BasketCleared.kind(), FlashKind::Info);
        assert_eq!(Notice::InvalidQuantity.kind(), FlashKind::Danger);

        assert_eq!(Notice::NameRequired.field(), Some("name"));
        assert_eq!(Notice::PriceTooLarge.field(), Some("price"));
        assert_eq!(Notice::QuantityNotPositive.field(), Some("quantity"));
        assert_eq!(Notice::ItemAdded.field(), None);
    }

    #[test]
    fn test_from_core_error() {
        let err = CoreError::InvalidPrice(ParseMoneyError::Empty);
        assert_eq!(Notice::from(&err), Notice::InvalidPrice);

        let err = CoreError::Validation(ValidationError::QuantityNotPositive);
        assert_eq!(Notice::from(&err), Notice::QuantityNotPositive);

        let err = CoreError::QuantityTooLarge { max: MAX_QUANTITY };
        assert_eq!(Notice::from(&err), Notice::QuantityTooLarge);
    }

    #[test]
    fn test_free_text_is_not_shown() {
        let query = FlashQuery {
            notice: Some("Payment received".to_string()),
        };
        assert_eq!(query.into_notice(), None);
        assert_eq!(FlashQuery::default().into_notice(), None);

        let query = FlashQuery {
            notice: Some("basket-cleared".to_string()),
        };
        assert_eq!(query.into_notice(), Some(Notice::BasketCleared));
    }
}
