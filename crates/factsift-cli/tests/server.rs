//! HTTP surface tests driven through the axum router.

mod common;

use std::sync::Arc;

use assert_json_diff::assert_json_eq;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::{pipeline, StaticRenderer, LISTING};
use factsift_cli::server::router;

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_scrape_returns_wrapped_report() {
    let renderer = Arc::new(StaticRenderer::serving(LISTING));
    let app = router(Arc::new(pipeline(renderer.clone(), "rent: Rs. 85,000")));

    let (status, body) = get(
        app,
        "/scrape?url=https%3A%2F%2Fexample.com%2Flisting%2F7&query=monthly%20rent",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body,
        json!({
            "success": true,
            "data": {
                "url": "https://example.com/listing/7",
                "query": "monthly rent",
                "extracted_data": "rent: Rs. 85,000"
            }
        })
    );
    assert_eq!(renderer.render_count(), 1);
}

#[tokio::test]
async fn test_scrape_without_answer_reports_sentinel() {
    let renderer = Arc::new(StaticRenderer::serving(LISTING));
    let app = router(Arc::new(pipeline(renderer, "   ")));

    let (status, body) = get(app, "/scrape?url=https%3A%2F%2Fexample.com&query=price").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["extracted_data"], "No relevant data found");
}

#[tokio::test]
async fn test_missing_parameter_is_a_bad_request() {
    let renderer = Arc::new(StaticRenderer::serving(LISTING));
    let app = router(Arc::new(pipeline(renderer.clone(), "unused")));

    let (status, body) = get(app.clone(), "/scrape?url=https%3A%2F%2Fexample.com").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_eq!(body, json!({ "error": "Missing 'url' or 'query' parameter" }));

    let (status, _) = get(app, "/scrape?url=&query=price").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(renderer.render_count(), 0);
}

#[tokio::test]
async fn test_render_failure_is_a_server_error() {
    let renderer = Arc::new(StaticRenderer::unreachable());
    let app = router(Arc::new(pipeline(renderer, "unused")));

    let (status, body) = get(app, "/scrape?url=https%3A%2F%2Fdown.example&query=price").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Scraping failed");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("ERR_NAME_NOT_RESOLVED"));
}

#[tokio::test]
async fn test_health() {
    let renderer = Arc::new(StaticRenderer::serving(""));
    let app = router(Arc::new(pipeline(renderer, "unused")));

    let (status, body) = get(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(body, json!({ "status": "ok" }));
}
