//! HTTP API for factsift.
//!
//! `GET /scrape?url=...&query=...` runs the pipeline for one page and wraps
//! the report as `{"success": true, "data": {...}}`. The pipeline (and the
//! browser behind it) is created once and shared by all requests; each
//! request renders in its own tab.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};

use factsift::{Pipeline, ScrapeRequest};

/// Body of the 400 response for a missing `url` or `query`.
pub const MISSING_PARAMS_MESSAGE: &str = "Missing 'url' or 'query' parameter";

/// Query parameters of `/scrape`.
#[derive(serde::Deserialize, Default)]
struct ScrapeParams {
    url: Option<String>,
    query: Option<String>,
}

/// Build the axum Router.
pub fn router(pipeline: Arc<Pipeline>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/scrape", get(scrape))
        .layer(cors)
        .with_state(pipeline)
}

/// Serve the API until the process is stopped.
pub async fn start(addr: SocketAddr, pipeline: Arc<Pipeline>) -> anyhow::Result<()> {
    let app = router(pipeline);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("factsift API listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

// ── Handlers ────────────────────────────────────────────────────

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn scrape(
    Query(params): Query<ScrapeParams>,
    State(pipeline): State<Arc<Pipeline>>,
) -> (StatusCode, Json<Value>) {
    let request = match ScrapeRequest::new(params.url.as_deref(), params.query.as_deref()) {
        Ok(request) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": MISSING_PARAMS_MESSAGE })),
            );
        }
    };

    info!("scraping started for {} | query: {}", request.url, request.query);
    match pipeline.run(&request).await {
        Ok(report) => {
            info!("scraping completed for {}", request.url);
            (
                StatusCode::OK,
                Json(json!({ "success": true, "data": report })),
            )
        }
        Err(e) => {
            error!("scraping failed for {}: {e}", request.url);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "error": "Scraping failed",
                    "details": e.to_string(),
                })),
            )
        }
    }
}
