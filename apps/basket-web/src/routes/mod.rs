//! # HTTP Routes
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  pages.rs    GET  /               index (form, flash, items, total)     │
//! │              POST /add            form add, redirect with flash         │
//! │              GET|POST /summary    statistics page                       │
//! │              POST /clear          clear, redirect with flash            │
//! │                                                                         │
//! │  report.rs   POST /download-pdf   PDF attachment                        │
//! │                                                                         │
//! │  api.rs      GET    /api/basket/items     line items                    │
//! │              POST   /api/basket/items     add, 201 + summary            │
//! │              DELETE /api/basket/items     clear, 204                    │
//! │              GET    /api/basket/summary   summary                       │
//! │                                                                         │
//! │  (here)      GET  /health             liveness probe                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod pages;
pub mod report;

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Builds the full application router around `state`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/add", post(pages::add_item))
        .route("/summary", get(pages::summary).post(pages::summary))
        .route("/clear", post(pages::clear))
        .route("/download-pdf", post(report::download_pdf))
        .route(
            "/api/basket/items",
            get(api::list_items)
                .post(api::add_item)
                .delete(api::clear_items),
        )
        .route("/api/basket/summary", get(api::get_summary))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}
