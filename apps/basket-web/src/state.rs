//! # Basket State
//!
//! The one basket this process serves, shared across request handlers.
//!
//! ## Thread Safety
//! The store is wrapped in `Arc<Mutex<T>>` because:
//! 1. axum runs handlers concurrently on the tokio runtime
//! 2. `add` and `clear` must not interleave with each other or with reads
//! 3. Every handler holds the lock for exactly one core call or snapshot
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Request                Handler              Store access               │
//! │  ───────                ───────              ────────────               │
//! │  POST /add ───────────► add_item() ────────► with_store_mut(add)        │
//! │  POST /clear ─────────► clear() ───────────► with_store_mut(clear)      │
//! │  GET  /api/.../summary► get_summary() ─────► summary() (snapshot)       │
//! │  POST /download-pdf ──► download_pdf() ────► summary(), render unlocked │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use basket_core::{BasketStore, BasketSummary};
use basket_report::PdfReport;

use crate::views::Views;

/// Shared handle to the process-wide basket.
#[derive(Debug, Clone, Default)]
pub struct BasketState {
    store: Arc<Mutex<BasketStore>>,
}

impl BasketState {
    /// Creates state around an empty basket.
    pub fn new() -> Self {
        BasketState {
            store: Arc::new(Mutex::new(BasketStore::new())),
        }
    }

    /// A panic while holding the lock cannot leave the store half-updated
    /// (`add` validates before it pushes), so a poisoned lock is still safe
    /// to use.
    fn lock(&self) -> MutexGuard<'_, BasketStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = basket.with_store(|store| store.count());
    /// ```
    pub fn with_store<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&BasketStore) -> R,
    {
        let store = self.lock();
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// basket.with_store_mut(|store| store.add(item))?;
    /// ```
    pub fn with_store_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut BasketStore) -> R,
    {
        let mut store = self.lock();
        f(&mut store)
    }

    /// Consistent snapshot of every aggregate, taken under one lock.
    pub fn summary(&self) -> BasketSummary {
        self.with_store(|store| BasketSummary::from(store))
    }
}

/// Everything the router needs, injected with `Router::with_state`.
#[derive(Debug, Clone)]
pub struct AppState {
    pub basket: BasketState,
    pub report: Arc<PdfReport>,
    pub views: Arc<Views>,
}

impl AppState {
    pub fn new(basket: BasketState, report: PdfReport, views: Views) -> Self {
        AppState {
            basket,
            report: Arc::new(report),
            views: Arc::new(views),
        }
    }
}
