//! HTTP-level integration tests for the `/api/payments` endpoints.
//!
//! Checkout and status polling need a live Stripe client, so these tests
//! cover the paths reachable without one: the package catalog, input
//! validation, unconfigured-system errors, and webhook verification
//! (which only needs the signing secret).

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{assert_error, body_json, build_test_app, get, post_json, test_config};
use hmac::{Hmac, Mac};
use nanoedit_store::models::transaction::PaymentTransaction;
use nanoedit_store::repositories::TransactionRepo;
use serde_json::json;
use sha2::Sha256;
use tower::ServiceExt;

const WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Build a `Stripe-Signature` header value for `payload`.
fn sign_payload(payload: &[u8], secret: &str) -> String {
    let ts = chrono::Utc::now().timestamp();
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes()).unwrap();
    mac.update(ts.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    let hex: String = mac
        .finalize()
        .into_bytes()
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect();
    format!("t={ts},v1={hex}")
}

/// Send a webhook POST with an optional signature header.
async fn post_webhook(
    app: axum::Router,
    payload: &[u8],
    signature: Option<&str>,
) -> axum::http::Response<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/payments/webhook/stripe")
        .header("content-type", "application/json");
    if let Some(signature) = signature {
        builder = builder.header("stripe-signature", signature);
    }
    app.oneshot(builder.body(Body::from(payload.to_vec())).unwrap())
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: GET /api/payments/packages returns the catalog keyed by id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn packages_catalog_is_listed() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = get(app, "/api/payments/packages").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);

    let packages = json["packages"].as_object().unwrap();
    assert_eq!(packages.len(), 4);
    assert_eq!(packages["pro_monthly"]["amount"], 19.0);
    assert_eq!(packages["pro_monthly"]["credits"], 500);
    assert_eq!(packages["enterprise_monthly"]["credits"], "unlimited");
}

// ---------------------------------------------------------------------------
// Test: checkout with an unknown package is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checkout_with_unknown_package_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(
        app,
        "/api/payments/checkout",
        json!({"packageId": "free_forever", "originUrl": "http://localhost:5173"}),
    )
    .await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: checkout without a configured Stripe client is a 500
// ---------------------------------------------------------------------------

#[tokio::test]
async fn checkout_without_stripe_is_unconfigured() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(
        app,
        "/api/payments/checkout",
        json!({"packageId": "pro_monthly", "originUrl": "http://localhost:5173"}),
    )
    .await;
    assert_error(
        response,
        StatusCode::INTERNAL_SERVER_ERROR,
        "PAYMENT_NOT_CONFIGURED",
    )
    .await;
}

// ---------------------------------------------------------------------------
// Test: status of an unknown session is a 404 even without Stripe
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_of_unknown_session_is_404() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = get(app, "/api/payments/status/cs_never_seen").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: webhook without a signature header is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn webhook_without_signature_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path().to_path_buf());
    config.stripe_webhook_secret = Some(WEBHOOK_SECRET.to_string());
    let (app, _state) = build_test_app(config);

    let response = post_webhook(app, b"{}", None).await;
    assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

// ---------------------------------------------------------------------------
// Test: webhook with a bad signature is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn webhook_with_bad_signature_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path().to_path_buf());
    config.stripe_webhook_secret = Some(WEBHOOK_SECRET.to_string());
    let (app, _state) = build_test_app(config);

    let payload = br#"{"type":"checkout.session.completed","data":{"object":{"id":"cs_1"}}}"#;
    let signature = sign_payload(payload, "whsec_wrong_secret");
    let response = post_webhook(app, payload, Some(&signature)).await;
    assert_error(response, StatusCode::BAD_REQUEST, "WEBHOOK_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: signed completion webhook settles the transaction
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signed_webhook_settles_known_session() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path().to_path_buf());
    config.stripe_webhook_secret = Some(WEBHOOK_SECRET.to_string());
    let (app, state) = build_test_app(config);

    TransactionRepo::create(
        &state.db,
        PaymentTransaction::pending(
            "cs_123".to_string(),
            "pro_monthly".to_string(),
            19.0,
            "usd".to_string(),
            json!({"packageName": "Pro Monthly"}),
        ),
    )
    .await
    .unwrap();

    let payload = json!({
        "id": "evt_1",
        "type": "checkout.session.completed",
        "data": {"object": {"id": "cs_123", "payment_status": "paid"}}
    })
    .to_string();
    let signature = sign_payload(payload.as_bytes(), WEBHOOK_SECRET);

    let response = post_webhook(app, payload.as_bytes(), Some(&signature)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["eventProcessed"], true);

    let transaction = TransactionRepo::find_by_session(&state.db, "cs_123")
        .await
        .unwrap();
    assert!(transaction.webhook_processed);
    assert_eq!(transaction.payment_status, "paid");
}

// ---------------------------------------------------------------------------
// Test: completion webhook for an unknown session still succeeds
// ---------------------------------------------------------------------------

#[tokio::test]
async fn signed_webhook_for_unknown_session_still_succeeds() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path().to_path_buf());
    config.stripe_webhook_secret = Some(WEBHOOK_SECRET.to_string());
    let (app, _state) = build_test_app(config);

    let payload = json!({
        "id": "evt_2",
        "type": "checkout.session.completed",
        "data": {"object": {"id": "cs_unknown", "payment_status": "paid"}}
    })
    .to_string();
    let signature = sign_payload(payload.as_bytes(), WEBHOOK_SECRET);

    let response = post_webhook(app, payload.as_bytes(), Some(&signature)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
}
