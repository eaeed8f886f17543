//! JSON API over the shared basket.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use basket_core::validation::validate_input;
use basket_core::{BasketItem, BasketSummary, LineItem};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /api/basket/items`
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<LineItem>> {
    let items = state
        .basket
        .with_store(|store| LineItem::numbered(store.iter()));

    debug!(count = items.len(), "Listing basket items");
    Json(items)
}

/// `GET /api/basket/summary`
pub async fn get_summary(State(state): State<AppState>) -> Json<BasketSummary> {
    Json(state.basket.summary())
}

/// `POST /api/basket/items`
///
/// Responds `201 Created` with the updated summary, or `400` with the
/// validation reason. Amounts above the input limits are refused before the
/// store sees them.
pub async fn add_item(
    State(state): State<AppState>,
    Json(item): Json<BasketItem>,
) -> Result<(StatusCode, Json<BasketSummary>), ApiError> {
    let name = item.name.clone();

    let summary = validate_input(&item).map_err(ApiError::from).and_then(|()| {
        state.basket.with_store_mut(|store| {
            store.add(item)?;
            Ok::<_, ApiError>(BasketSummary::from(&*store))
        })
    });

    match summary {
        Ok(summary) => {
            info!(item = %name, count = summary.item_count, "Item added via API");
            Ok((StatusCode::CREATED, Json(summary)))
        }
        Err(e) => {
            warn!(error = %e, "Rejected basket item");
            Err(e)
        }
    }
}

/// `DELETE /api/basket/items`
pub async fn clear_items(State(state): State<AppState>) -> StatusCode {
    state.basket.with_store_mut(|store| store.clear());
    info!("Basket cleared via API");
    StatusCode::NO_CONTENT
}
