use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use serde_json::json;

use dxcheck::dx_client::{DxClient, DxError};
use dxcheck::models::{DiagnosisResult, DxRequest, DxResponse};

/// Serve `router` on an ephemeral local port and return a base URL with the
/// `/api` prefix the client expects.
async fn spawn_service(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/api", addr)
}

#[tokio::test]
async fn success_preserves_service_order() {
    let router = Router::new().route(
        "/api/dx/send_text",
        post(|| async {
            Json(DxResponse {
                predictions: vec![
                    DiagnosisResult {
                        label: "Flu".to_string(),
                        probability: 0.73,
                    },
                    DiagnosisResult {
                        label: "Cold".to_string(),
                        probability: 0.21,
                    },
                ],
            })
        }),
    );
    let base_url = spawn_service(router).await;

    let client = DxClient::new(base_url);
    let predictions = client.send_text("fever and cough").await.unwrap();

    assert_eq!(predictions.len(), 2);
    assert_eq!(predictions[0].label, "Flu");
    assert_eq!(predictions[0].probability_percent(), "73.00%");
    assert_eq!(predictions[1].label, "Cold");
    assert_eq!(predictions[1].probability_percent(), "21.00%");
}

#[tokio::test]
async fn request_carries_symptoms_as_json() {
    // The Json extractor rejects requests without a JSON content type, so a
    // successful echo also proves the header is set.
    let router = Router::new().route(
        "/api/dx/send_text",
        post(|Json(request): Json<DxRequest>| async move {
            Json(DxResponse {
                predictions: vec![DiagnosisResult {
                    label: request.symptoms,
                    probability: 1.0,
                }],
            })
        }),
    );
    let base_url = spawn_service(router).await;

    let client = DxClient::new(base_url);
    let predictions = client.send_text("headache").await.unwrap();

    assert_eq!(predictions.len(), 1);
    assert_eq!(predictions[0].label, "headache");
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let router = Router::new().route(
        "/api/dx/send_text",
        post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base_url = spawn_service(router).await;

    let client = DxClient::new(base_url);
    let err = client.send_text("headache").await.unwrap_err();

    match err {
        DxError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    // Body shape of a service that accepted the text but returned no
    // predictions field.
    let router = Router::new().route(
        "/api/dx/send_text",
        post(|| async { Json(json!({ "message": "Text received." })) }),
    );
    let base_url = spawn_service(router).await;

    let client = DxClient::new(base_url);
    let err = client.send_text("headache").await.unwrap_err();

    assert!(matches!(err, DxError::Decode(_)));
}

#[tokio::test]
async fn unreachable_service_is_request_error() {
    // Nothing listens on the bound-then-dropped port.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = DxClient::new(format!("http://{}/api", addr));
    let err = client.send_text("headache").await.unwrap_err();

    assert!(matches!(err, DxError::Request(_)));
}
