#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use nanoedit_api::config::ServerConfig;
use nanoedit_api::router::build_app_router;
use nanoedit_api::state::AppState;
use nanoedit_core::content::ContentCatalog;
use nanoedit_store::Db;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uploads land in the given directory (a per-test tempdir) and the
/// simulated generation delay is zero so background tasks finish
/// immediately.
pub fn test_config(uploads_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        uploads_dir,
        min_generation_delay_ms: 0,
        max_generation_delay_ms: 0,
        stripe_secret_key: None,
        stripe_webhook_secret: None,
    }
}

/// Build the full application router with all middleware layers, plus the
/// state behind it so tests can seed and inspect the store directly.
///
/// This goes through the same [`build_app_router`] that `main.rs` uses, so
/// tests exercise the production middleware stack.
pub fn build_test_app(config: ServerConfig) -> (Router, AppState) {
    let state = AppState {
        db: Db::new(),
        config: Arc::new(config),
        content: Arc::new(ContentCatalog::load()),
        stripe: None,
    };
    let app = build_app_router(state.clone(), state.config.as_ref());
    (app, state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request to the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with an empty body.
pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a DELETE request to the app.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Send a POST request with a multipart body.
pub async fn post_multipart(
    app: Router,
    uri: &str,
    boundary: &str,
    body: Vec<u8>,
) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Build a single-field multipart body for `boundary`.
pub fn multipart_body(
    boundary: &str,
    field: &str,
    filename: &str,
    content_type: &str,
    content: &[u8],
) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
    body.extend_from_slice(content);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert an error response's status and error code.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], code);
}
