//! PDF download.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use basket_report::REPORT_FILE_NAME;
use chrono::Local;
use tracing::info;

use crate::error::ApiError;
use crate::state::AppState;

/// `POST /download-pdf`
///
/// The basket is snapshotted under the lock and rendered after it is
/// released. Render failures become a 500, never an empty attachment.
pub async fn download_pdf(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let summary = state.basket.summary();
    let bytes = state
        .report
        .render(&summary, Local::now().naive_local())?;

    info!(
        items = summary.item_count,
        bytes = bytes.len(),
        "Summary PDF generated"
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
        ),
        (header::CACHE_CONTROL, "no-store".to_string()),
    ];

    Ok((headers, bytes))
}
