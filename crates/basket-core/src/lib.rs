//! # basket-core: Pure Business Logic for the Basket Tracker
//!
//! This crate is the **heart** of the basket tracker. It owns the validated
//! item collection and the aggregate computations, with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Basket Tracker Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                basket-web (axum)                                │   │
//! │  │    HTML pages ──► JSON API ──► PDF download                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ BasketState (Arc<Mutex<..>>)           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ basket-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │   store   │  │ validation│  │   │
//! │  │   │BasketItem │  │   Money   │  │BasketStore│  │   rules   │  │   │
//! │  │   │ LineItem  │  │           │  │  summary  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO LOCKING • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              basket-report (PDF rendering)                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `BasketItem` and `LineItem`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Item validation rules
//! - [`store`] - `BasketStore`, the ordered item collection
//! - [`summary`] - `BasketSummary`, the snapshot handed to presentation layers
//!
//! ## Example Usage
//!
//! ```rust
//! use basket_core::{BasketItem, BasketStore, Money};
//!
//! let mut store = BasketStore::new();
//! store.add(BasketItem::new("Rice", Money::from_major(5000), 2)).unwrap();
//! store.add(BasketItem::new("Beans", Money::from_major(3000), 1)).unwrap();
//!
//! assert_eq!(store.total(), Money::from_major(13000));
//! assert_eq!(store.count(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod store;
pub mod summary;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use basket_core::Money` instead of
// `use basket_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, ParseMoneyError};
pub use store::BasketStore;
pub use summary::BasketSummary;
pub use types::{BasketItem, LineItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of items returned by [`BasketStore::top_three`] and shown in the
/// "most expensive" sections of every summary.
pub const DEFAULT_TOP_N: usize = 3;
