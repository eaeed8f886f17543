//! HTML page handlers.
//!
//! Mutating forms answer with a 303 redirect back to `/` carrying a notice
//! key, so a browser refresh never re-submits the form.

use axum::extract::{Query, State};
use axum::response::{Html, Redirect};
use axum::Form;
use basket_core::validation::{validate_input, validate_item_name};
use basket_core::{BasketItem, CoreError, CoreResult, LineItem, Money};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::flash::{FlashQuery, Notice};
use crate::state::AppState;

/// Raw fields of the add-item form.
///
/// Everything arrives as text; missing fields deserialize as empty strings so
/// they fail validation instead of being rejected by the extractor.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddItemForm {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl AddItemForm {
    /// Converts the form into an item for [`BasketStore::add`].
    ///
    /// The name is checked before the numbers are parsed, so an empty form
    /// reports "name required" first. Values that parse pass through here
    /// whatever their range; [`validate_input`] judges them next.
    ///
    /// [`BasketStore::add`]: basket_core::BasketStore::add
    pub fn into_item(self) -> CoreResult<BasketItem> {
        validate_item_name(&self.name)?;

        let unit_price: Money = self.price.trim().parse()?;
        let quantity: i64 =
            self.quantity
                .trim()
                .parse()
                .map_err(|_| CoreError::InvalidQuantity {
                    input: self.quantity.clone(),
                })?;

        Ok(BasketItem::new(self.name.trim(), unit_price, quantity))
    }
}

/// `GET /`
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<FlashQuery>,
) -> Result<Html<String>, ApiError> {
    let (items, total) = state
        .basket
        .with_store(|store| (LineItem::numbered(store.iter()), store.total()));

    debug!(count = items.len(), "Rendering basket page");
    let html = state
        .views
        .render_index(&items, total, query.into_notice())?;
    Ok(Html(html))
}

/// `POST /add`
pub async fn add_item(State(state): State<AppState>, Form(form): Form<AddItemForm>) -> Redirect {
    let result = form.into_item().and_then(|item| {
        validate_input(&item)?;
        let name = item.name.clone();
        state
            .basket
            .with_store_mut(|store| store.add(item))
            .map(|()| name)
            .map_err(CoreError::from)
    });

    let notice = match result {
        Ok(name) => {
            info!(item = %name, "Item added to basket");
            Notice::ItemAdded
        }
        Err(e) => {
            warn!(error = %e, "Rejected basket item");
            Notice::from(&e)
        }
    };

    notice.redirect("/")
}

/// `GET /summary` and `POST /summary`
pub async fn summary(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let summary = state.basket.summary();
    debug!(count = summary.item_count, "Rendering summary page");
    Ok(Html(state.views.render_summary(&summary)?))
}

/// `POST /clear`
pub async fn clear(State(state): State<AppState>) -> Redirect {
    let removed = state.basket.with_store_mut(|store| {
        let count = store.count();
        store.clear();
        count
    });

    info!(removed, "Basket cleared");
    Notice::BasketCleared.redirect("/")
}
