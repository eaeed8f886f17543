//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Basket Tracker                     │
//! │                                                                         │
//! │  HTML form (POST /add)                                                  │
//! │    CoreError ──► Notice key ──► redirect to /?notice=...                │
//! │                                                                         │
//! │  JSON API (POST /api/basket/items)                                      │
//! │    ValidationError ──► ApiError ──► 400 {"code", "message"}             │
//! │                                                                         │
//! │  HTML pages (GET /, /summary)                                           │
//! │    minijinja::Error ──► logged ──► ApiError ──► 500                     │
//! │                                                                         │
//! │  PDF download (POST /download-pdf)                                      │
//! │    ReportError ──► logged ──► ApiError ──► 500 (never an empty PDF)     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use basket_core::{CoreError, ValidationError};
use basket_report::ReportError;
use serde::Serialize;

/// API error returned from handlers.
///
/// ## Serialization
/// This is what JSON clients receive when a request fails:
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "price must be positive"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Item rejected by the store (400)
    ValidationError,

    /// Raw input could not be parsed (400)
    InvalidInput,

    /// PDF generation failed (500)
    ReportError,

    /// HTML template failed to render (500)
    RenderError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError | ErrorCode::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorCode::ReportError | ErrorCode::RenderError => {
                StatusCode::INTERNAL_SERVER_ERROR
            },
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

/// Converts store validation errors to API errors.
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => e.into(),
            e @ (CoreError::InvalidPrice(_)
            | CoreError::InvalidQuantity { .. }
            | CoreError::PriceTooLarge { .. }
            | CoreError::QuantityTooLarge { .. }) => {
                ApiError::new(ErrorCode::InvalidInput, e.to_string())
            }
        }
    }
}

/// Converts report errors to API errors.
impl From<ReportError> for ApiError {
    fn from(err: ReportError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!(error = %err, "Report generation failed");
        ApiError::new(ErrorCode::ReportError, "Failed to generate the PDF report")
    }
}

/// Converts template errors to API errors.
impl From<minijinja::Error> for ApiError {
    fn from(err: minijinja::Error) -> Self {
        tracing::error!(error = %err, "Page rendering failed");
        ApiError::new(ErrorCode::RenderError, "Failed to render the page")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;
    use basket_core::ParseMoneyError;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err: ApiError = ValidationError::PriceNotPositive.into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "price must be positive");
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_core_error_mapping() {
        let err: ApiError = CoreError::Validation(ValidationError::NameRequired).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name required");

        let err: ApiError = CoreError::InvalidPrice(ParseMoneyError::Empty).into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.message, "price has invalid format: amount is empty");

        let err: ApiError = CoreError::QuantityTooLarge { max: 1_000_000 }.into();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.code.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_render_error_hides_cause() {
        let cause = minijinja::Error::new(
            minijinja::ErrorKind::TemplateNotFound,
            "missing.html",
        );
        let err: ApiError = cause.into();

        assert_eq!(err.code, ErrorCode::RenderError);
        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("missing"));
    }

    #[test]
    fn test_report_error_hides_cause() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "secret path");
        let err: ApiError = ReportError::Io(cause).into();

        assert_eq!(err.code.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.message.contains("secret"));
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("name required")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "name required");
    }
}
