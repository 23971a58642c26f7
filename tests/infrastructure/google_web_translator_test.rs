use std::collections::HashMap;

use axum::Router;
use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::json;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use dubline::application::ports::{TranslationError, TranslationProvider};
use dubline::infrastructure::translation::{GoogleWebTranslator, parse_google_response};

async fn start_mock_google_server(status: u16) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/translate_a/single",
        get(move |Query(params): Query<HashMap<String, String>>| async move {
            let status = StatusCode::from_u16(status).unwrap();
            let tl = params.get("tl").cloned().unwrap_or_default();
            let q = params.get("q").cloned().unwrap_or_default();
            let body = json!([
                [[format!("[{}] ", tl), "", null], [q, "", null]],
                null,
                params.get("sl").cloned().unwrap_or_default()
            ]);
            (status, axum::Json(body)).into_response()
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

#[tokio::test]
async fn given_google_answers_when_translating_then_joins_segments() {
    let (base_url, shutdown_tx) = start_mock_google_server(200).await;
    let translator = GoogleWebTranslator::new(reqwest::Client::new(), Some(base_url));

    let result = translator.translate("Hello & goodbye", "my").await;

    assert_eq!(result.unwrap(), "[my] Hello & goodbye");
    assert_eq!(translator.name(), "google");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_google_error_status_when_translating_then_returns_api_error() {
    let (base_url, shutdown_tx) = start_mock_google_server(429).await;
    let translator = GoogleWebTranslator::new(reqwest::Client::new(), Some(base_url));

    let result = translator.translate("Hello", "my").await;

    assert!(matches!(result, Err(TranslationError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_host_when_translating_then_returns_api_error() {
    let translator = GoogleWebTranslator::new(
        reqwest::Client::new(),
        Some("http://127.0.0.1:1".to_string()),
    );

    let result = translator.translate("Hello", "my").await;

    assert!(matches!(result, Err(TranslationError::ApiRequestFailed(_))));
}

#[test]
fn given_malformed_body_when_parsing_then_returns_invalid_response() {
    let result = parse_google_response(&json!({"error": "nope"}));

    assert!(matches!(result, Err(TranslationError::InvalidResponse(_))));
}

#[test]
fn given_segment_list_when_parsing_then_skips_non_text_entries() {
    let body = json!([[["Mingalaba", "Hello"], [null, null], [" friend", " friend"]]]);

    assert_eq!(parse_google_response(&body).unwrap(), "Mingalaba friend");
}
