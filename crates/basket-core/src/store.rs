//! # Basket Store
//!
//! The ordered, validated collection of basket items and its aggregates.
//!
//! ## Store Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    BasketStore Operations                               │
//! │                                                                         │
//! │  Mutators (the only two)          Reads (total, never fail)            │
//! │  ───────────────────────          ─────────────────────────            │
//! │  add(item)  ── N → N+1            items()          snapshot clone      │
//! │     └── validate first            total()          Σ subtotal          │
//! │  clear()    ── N → 0              average()        mean unit price     │
//! │                                   top_expensive(n) stable, descending  │
//! │                                   count()                              │
//! │                                                                         │
//! │  Insertion order is display order AND tie-break order.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency
//! The store does no locking. Whoever shares it across requests wraps it
//! (the web app keeps one behind `Arc<Mutex<BasketStore>>`).

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::BasketItem;
use crate::validation::validate_item;
use crate::DEFAULT_TOP_N;

/// The basket.
///
/// ## Invariants
/// - Every stored item passed [`validate_item`]
/// - Items keep their insertion order
/// - Callers only ever receive clones of stored items
#[derive(Debug, Clone, Default)]
pub struct BasketStore {
    items: Vec<BasketItem>,
}

impl BasketStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        BasketStore { items: Vec::new() }
    }

    /// Validates `item` and appends it to the end of the basket.
    ///
    /// On error the store is left exactly as it was.
    ///
    /// ## Example
    /// ```rust
    /// use basket_core::{BasketItem, BasketStore, Money, ValidationError};
    ///
    /// let mut store = BasketStore::new();
    /// let err = store.add(BasketItem::new("", Money::from_major(1000), 1));
    /// assert_eq!(err, Err(ValidationError::NameRequired));
    /// assert_eq!(store.count(), 0);
    /// ```
    pub fn add(&mut self, item: BasketItem) -> Result<(), ValidationError> {
        validate_item(&item)?;
        self.items.push(item);
        Ok(())
    }

    /// Returns a snapshot of all items in insertion order.
    pub fn items(&self) -> Vec<BasketItem> {
        self.items.clone()
    }

    /// Iterates stored items without cloning.
    pub fn iter(&self) -> impl Iterator<Item = &BasketItem> {
        self.items.iter()
    }

    /// Sum of all subtotals. Zero for an empty basket.
    pub fn total(&self) -> Money {
        self.items.iter().map(BasketItem::subtotal).sum()
    }

    /// Mean unit price (not subtotal) across items, rounded to the cent.
    /// Zero for an empty basket.
    pub fn average(&self) -> Money {
        Money::average_of(self.items.iter().map(|item| item.unit_price))
    }

    /// The `n` items with the highest unit price, most expensive first.
    ///
    /// Equal prices keep their insertion order. Returns fewer than `n` items
    /// when the basket is smaller.
    pub fn top_expensive(&self, n: usize) -> Vec<BasketItem> {
        let mut ranked: Vec<&BasketItem> = self.items.iter().collect();
        // sort_by is stable, so ties stay in insertion order
        ranked.sort_by(|a, b| b.unit_price.cmp(&a.unit_price));
        ranked.into_iter().take(n).cloned().collect()
    }

    /// [`top_expensive`](Self::top_expensive) with the default of three.
    pub fn top_three(&self) -> Vec<BasketItem> {
        self.top_expensive(DEFAULT_TOP_N)
    }

    /// Number of stored items.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Checks if the basket is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Removes every item. Clearing an empty basket is a no-op.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
