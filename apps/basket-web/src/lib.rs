//! # basket-web: HTTP Server for the Basket Tracker
//!
//! Serves one shared basket over HTML pages, a JSON API and a PDF download.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Browser ──► POST /add ──► AddItemForm ──► BasketStore::add             │
//! │     ▲                                          │                        │
//! │     └──── 303 /?notice=item-added ◄────────────┘                        │
//! │                                                                         │
//! │  Client ──► /api/basket/* ──► BasketState ──► JSON                      │
//! │                                                                         │
//! │  Browser ──► POST /download-pdf ──► summary() ──► PdfReport::render     │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod flash;
pub mod routes;
pub mod state;
pub mod views;

pub use config::{ConfigError, WebConfig};
pub use error::{ApiError, ErrorCode};
pub use state::{AppState, BasketState};
pub use views::Views;

use axum::Router;

/// Builds the application router around `state`.
pub fn app(state: AppState) -> Router {
    routes::router(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use basket_report::PdfReport;
    use tower::ServiceExt;

    fn test_app() -> (Router, BasketState) {
        let basket = BasketState::new();
        let views = Views::new().unwrap();
        let app = app(AppState::new(basket.clone(), PdfReport::default(), views));
        (app, basket)
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<(&str, &str)>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some((content_type, payload)) => {
                builder = builder.header(header::CONTENT_TYPE, content_type);
                Body::from(payload.to_string())
            }
            None => Body::empty(),
        };

        app.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    async fn post_form(app: &Router, uri: &str, payload: &str) -> Response {
        send(app, Method::POST, uri, Some(("application/x-www-form-urlencoded", payload))).await
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn location(response: &Response) -> &str {
        response.headers()[header::LOCATION].to_str().unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let response = send(&app, Method::GET, "/health", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, "OK");
    }

    #[tokio::test]
    async fn test_form_add_redirects_with_success_notice() {
        let (app, basket) = test_app();
        let response = post_form(&app, "/add", "name=Rice&price=5000&quantity=2").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "/?notice=item-added"
        );
        assert_eq!(basket.with_store(|s| s.count()), 1);

        let page = send(&app, Method::GET, location(&response), None).await;
        let html = body_string(page).await;
        assert!(html.contains("alert-success"));
        assert!(html.contains("Item added successfully"));
        assert!(html.contains("<td>Rice</td>"));
        assert!(html.contains("$10,000.00"));
    }

    #[tokio::test]
    async fn test_form_add_rejects_invalid_item() {
        let (app, basket) = test_app();

        let response = post_form(&app, "/add", "name=&price=10&quantity=1").await;
        assert_eq!(
            location(&response),
            "/?notice=name-required"
        );

        let response = post_form(&app, "/add", "name=Rice&price=-100&quantity=1").await;
        assert_eq!(
            location(&response),
            "/?notice=price-not-positive"
        );

        let response = post_form(&app, "/add", "name=Rice&price=100&quantity=-5").await;
        assert_eq!(
            location(&response),
            "/?notice=quantity-not-positive"
        );

        let page = send(&app, Method::GET, location(&response), None).await;
        let html = body_string(page).await;
        assert!(html.contains("Error: quantity must be positive"));
        assert!(html.contains("value=\"1\" class=\"is-invalid\""));

        assert!(basket.summary().is_empty());
    }

    #[tokio::test]
    async fn test_oversized_form_input_is_refused() {
        let (app, basket) = test_app();

        let response =
            post_form(&app, "/add", "name=Rice&price=90000000000000000&quantity=2").await;
        assert_eq!(location(&response), "/?notice=price-too-large");

        let response = post_form(&app, "/add", "name=Rice&price=1&quantity=1000001").await;
        assert_eq!(location(&response), "/?notice=quantity-too-large");

        assert!(basket.summary().is_empty());
        let page = send(&app, Method::GET, "/", None).await;
        assert_eq!(page.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_index_ignores_free_text_notice() {
        let (app, _) = test_app();
        let page = send(
            &app,
            Method::GET,
            "/?notice=Payment+received&message=Payment+received&kind=success",
            None,
        )
        .await;

        let html = body_string(page).await;
        assert!(!html.contains("Payment received"));
        assert!(!html.contains("class=\"alert"));
    }

    #[tokio::test]
    async fn test_clear_redirects_with_info_notice() {
        let (app, basket) = test_app();
        post_form(&app, "/add", "name=Milk&price=2.50&quantity=4").await;

        let response = post_form(&app, "/clear", "").await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            location(&response),
            "/?notice=basket-cleared"
        );
        assert!(basket.summary().is_empty());
    }

    #[tokio::test]
    async fn test_summary_page_accepts_get_and_post() {
        let (app, _) = test_app();
        post_form(&app, "/add", "name=P1&price=1000&quantity=1").await;
        post_form(&app, "/add", "name=P2&price=3000&quantity=1").await;

        for method in [Method::GET, Method::POST] {
            let response = send(&app, method, "/summary", None).await;
            assert_eq!(response.status(), StatusCode::OK);

            let html = body_string(response).await;
            assert!(html.contains("AVERAGE<strong>$2,000.00</strong>"));
            assert!(html.contains("<li>P2 - $3,000.00</li>"));
        }
    }

    #[tokio::test]
    async fn test_api_add_and_summary() {
        let (app, _) = test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/basket/items",
            Some(("application/json", r#"{"name":"Rice","unitPrice":500000,"quantity":2}"#)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let summary: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(summary["itemCount"], 1);
        assert_eq!(summary["total"], 1_000_000);
        assert_eq!(summary["topExpensive"][0]["name"], "Rice");

        let response = send(&app, Method::GET, "/api/basket/items", None).await;
        let items: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["subtotal"], 1_000_000);
    }

    #[tokio::test]
    async fn test_api_rejects_invalid_item() {
        let (app, basket) = test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/basket/items",
            Some(("application/json", r#"{"name":"Rice","unitPrice":1000,"quantity":0}"#)),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(error["code"], "VALIDATION_ERROR");
        assert_eq!(error["message"], "quantity must be positive");
        assert!(basket.summary().is_empty());
    }

    #[tokio::test]
    async fn test_api_refuses_amounts_that_would_overflow() {
        let (app, basket) = test_app();

        let response = send(
            &app,
            Method::POST,
            "/api/basket/items",
            Some((
                "application/json",
                r#"{"name":"Rice","unitPrice":5000000000000000000,"quantity":2}"#,
            )),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: serde_json::Value =
            serde_json::from_str(&body_string(response).await).unwrap();
        assert_eq!(error["code"], "INVALID_INPUT");
        assert_eq!(
            error["message"],
            "price exceeds the maximum of $1,000,000,000.00"
        );
        assert!(basket.summary().is_empty());

        for uri in ["/", "/summary", "/api/basket/summary"] {
            let response = send(&app, Method::GET, uri, None).await;
            assert_eq!(response.status(), StatusCode::OK);
        }
        let response = send(&app, Method::POST, "/download-pdf", None).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_clear() {
        let (app, basket) = test_app();
        post_form(&app, "/add", "name=Rice&price=10&quantity=1").await;

        let response = send(&app, Method::DELETE, "/api/basket/items", None).await;

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(basket.summary().is_empty());
    }

    #[tokio::test]
    async fn test_download_pdf() {
        let (app, _) = test_app();
        post_form(&app, "/add", "name=Rice&price=5000&quantity=2").await;

        let response = send(&app, Method::POST, "/download-pdf", None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/pdf");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"basket-summary.pdf\""
        );

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
