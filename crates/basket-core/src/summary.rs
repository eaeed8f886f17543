//! # Basket Summary
//!
//! A plain-data snapshot of the store for presentation layers. The HTML
//! pages, the JSON API and the PDF report all render this one struct, so
//! they can never disagree on a number.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::store::BasketStore;
use crate::types::LineItem;

/// Everything a summary view shows.
///
/// ```json
/// {
///   "items": [{ "position": 1, "name": "Rice", "unitPrice": 500000, ... }],
///   "itemCount": 2,
///   "total": 1300000,
///   "average": 400000,
///   "topExpensive": [{ "position": 1, "name": "Rice", ... }]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BasketSummary {
    /// All items in insertion order, numbered from 1.
    pub items: Vec<LineItem>,
    pub item_count: usize,
    pub total: Money,
    pub average: Money,
    /// Top three by unit price; `position` is the rank.
    pub top_expensive: Vec<LineItem>,
}

impl BasketSummary {
    /// Checks if the summarized basket had no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<&BasketStore> for BasketSummary {
    fn from(store: &BasketStore) -> Self {
        BasketSummary {
            items: LineItem::numbered(store.iter()),
            item_count: store.count(),
            total: store.total(),
            average: store.average(),
            top_expensive: LineItem::numbered(&store.top_three()),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BasketItem;

    #[test]
    fn test_summary_of_empty_store() {
        let summary = BasketSummary::from(&BasketStore::new());

        assert!(summary.is_empty());
        assert_eq!(summary.item_count, 0);
        assert!(summary.total.is_zero());
        assert!(summary.average.is_zero());
        assert!(summary.top_expensive.is_empty());
    }

    #[test]
    fn test_summary_matches_store() {
        let mut store = BasketStore::new();
        store
            .add(BasketItem::new("Rice", Money::from_major(5000), 2))
            .unwrap();
        store
            .add(BasketItem::new("Beans", Money::from_major(3000), 1))
            .unwrap();
        store
            .add(BasketItem::new("Coffee", Money::from_major(9000), 1))
            .unwrap();

        let summary = BasketSummary::from(&store);

        assert_eq!(summary.item_count, 3);
        assert_eq!(summary.total, store.total());
        assert_eq!(summary.average, store.average());

        let positions: Vec<usize> = summary.items.iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(summary.items[0].subtotal, Money::from_major(10000));

        let ranked: Vec<(usize, &str)> = summary
            .top_expensive
            .iter()
            .map(|l| (l.position, l.name.as_str()))
            .collect();
        assert_eq!(ranked, vec![(1, "Coffee"), (2, "Rice"), (3, "Beans")]);
    }

    #[test]
    fn test_summary_json_field_names() {
        let mut store = BasketStore::new();
        store
            .add(BasketItem::new("Rice", Money::from_cents(500), 2))
            .unwrap();

        let json = serde_json::to_value(BasketSummary::from(&store)).unwrap();

        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["total"], 1000);
        assert_eq!(json["average"], 500);
        assert_eq!(json["items"][0]["name"], "Rice");
        assert_eq!(json["topExpensive"][0]["position"], 1);
    }
}
