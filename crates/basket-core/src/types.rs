//! # Domain Types
//!
//! The basket item and its read-only display projection.
//!
//! ## Type Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  form / JSON body                                                       │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  BasketItem (candidate, unvalidated)                                    │
//! │        │                                                                │
//! │        ▼  BasketStore::add ── validate ──► ValidationError              │
//! │        │                                                                │
//! │  BasketItem (stored, always valid, only cloned out)                     │
//! │        │                                                                │
//! │        ▼  BasketSummary::from                                           │
//! │  LineItem (position + subtotal baked in, for HTML / JSON / PDF)         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Basket Item
// =============================================================================

/// One priced, quantified product line.
///
/// Construction never validates: a default item can be filled in field by
/// field (the way a bound form is) and only meets the rules when it is handed
/// to [`BasketStore::add`](crate::BasketStore::add).
///
/// `#[serde(default)]` lets a JSON body omit fields; a missing name then fails
/// validation with "name required" instead of a deserialization error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BasketItem {
    /// Product name as typed; must be non-blank to be stored.
    pub name: String,

    /// Price of one unit.
    pub unit_price: Money,

    /// Number of units.
    pub quantity: i64,
}

impl BasketItem {
    /// Creates a candidate item. No validation happens here.
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: i64) -> Self {
        BasketItem {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price × quantity, recomputed on every call.
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// A basket item as presentation layers show it: numbered, with its
/// subtotal already computed.
///
/// `position` is 1-based. In the item list it is the insertion position; in a
/// ranking it is the rank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub position: usize,
    pub name: String,
    pub unit_price: Money,
    pub quantity: i64,
    pub subtotal: Money,
}

impl LineItem {
    /// Projects an item at the given 1-based position.
    pub fn from_item(position: usize, item: &BasketItem) -> Self {
        LineItem {
            position,
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            subtotal: item.subtotal(),
        }
    }

    /// Numbers a sequence of items starting at 1.
    pub fn numbered<'a, I>(items: I) -> Vec<LineItem>
    where
        I: IntoIterator<Item = &'a BasketItem>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| LineItem::from_item(i + 1, item))
            .collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
