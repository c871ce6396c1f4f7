//! Standalone stub of the diagnosis service for local development.
//!
//! Serves the same surface the desktop app talks to, with canned
//! predictions instead of a real inference model, so the page can be
//! exercised end to end without the backend.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::info;

use dxcheck::models::{DiagnosisResult, DxRequest, DxResponse};

#[tokio::main]
async fn main() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let app = Router::new()
        .route("/", get(hello))
        .route("/api/dx/send_text", post(send_text))
        .layer(CorsLayer::permissive());

    let addr = "127.0.0.1:8080";
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind stub server address");
    info!("dx stub server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .expect("stub server failed");
}

async fn hello() -> Json<serde_json::Value> {
    Json(json!({ "message": "Hello world!" }))
}

async fn send_text(Json(request): Json<DxRequest>) -> Json<DxResponse> {
    info!(
        "received symptom text ({} chars), returning canned predictions",
        request.symptoms.len()
    );

    Json(DxResponse {
        predictions: vec![
            DiagnosisResult {
                label: "Flu".to_string(),
                probability: 0.73,
            },
            DiagnosisResult {
                label: "Common cold".to_string(),
                probability: 0.21,
            },
            DiagnosisResult {
                label: "Allergic rhinitis".to_string(),
                probability: 0.04,
            },
        ],
    })
}
