//! Handlers for checkout, payment status, and the Stripe webhook.
//!
//! Amounts always come from the server-side package catalog; the client
//! only ever names a package id. A transaction record keyed by the Stripe
//! session id tracks each checkout, and the status poll and the webhook
//! both advance it.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use axum::Json;
use nanoedit_core::error::CoreError;
use nanoedit_core::payments::{find_package, Package, PACKAGES};
use nanoedit_store::models::transaction::{
    CheckoutResponse, CreateCheckoutRequest, PaymentStatusResponse, PaymentTransaction,
};
use nanoedit_store::repositories::TransactionRepo;
use nanoedit_stripe::{parse_event, verify_signature, CreateSessionParams};
use serde::Serialize;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct PackagesResponse {
    pub success: bool,
    pub packages: serde_json::Map<String, serde_json::Value>,
}

/// GET /api/payments/packages
pub async fn get_packages() -> AppResult<impl IntoResponse> {
    let mut packages = serde_json::Map::new();
    for package in PACKAGES {
        packages.insert(
            package.id.to_string(),
            serde_json::to_value(package)
                .map_err(|err| AppError::InternalError(err.to_string()))?,
        );
    }
    Ok(Json(PackagesResponse {
        success: true,
        packages,
    }))
}

/// POST /api/payments/checkout
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(request): Json<CreateCheckoutRequest>,
) -> AppResult<impl IntoResponse> {
    let package = find_package(&request.package_id)
        .ok_or_else(|| CoreError::Validation("Invalid subscription package".to_string()))?;
    let stripe = state.stripe.as_ref().ok_or(AppError::PaymentNotConfigured)?;

    let origin = request.origin_url.trim_end_matches('/');
    let params = CreateSessionParams {
        amount_cents: package.amount_cents(),
        currency: package.currency.to_string(),
        product_name: package.name.to_string(),
        success_url: format!(
            "{origin}?payment_success=true&session_id={{CHECKOUT_SESSION_ID}}"
        ),
        cancel_url: format!("{origin}?payment_cancelled=true"),
        metadata: vec![
            ("packageId".to_string(), package.id.to_string()),
            ("packageName".to_string(), package.name.to_string()),
        ],
    };

    let session = stripe.create_checkout_session(&params).await?;
    tracing::info!(session_id = %session.id, package_id = %package.id, "checkout session opened");

    let transaction = PaymentTransaction::pending(
        session.id.clone(),
        package.id.to_string(),
        package.amount,
        package.currency.to_string(),
        json!({
            "packageName": package.name,
            "credits": package.credits,
            "duration": package.duration,
            "checkoutUrl": session.url,
        }),
    );
    TransactionRepo::create(&state.db, transaction).await?;

    Ok(Json(CheckoutResponse {
        success: true,
        checkout_url: session.url,
        session_id: session.id,
        package_info: package_info(package),
    }))
}

/// GET /api/payments/status/{session_id}
pub async fn get_payment_status(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let transaction = TransactionRepo::find_by_session(&state.db, &session_id)
        .await
        .ok_or_else(|| CoreError::not_found("PaymentTransaction", &session_id))?;
    let stripe = state.stripe.as_ref().ok_or(AppError::PaymentNotConfigured)?;

    let session = stripe.get_checkout_session(&session_id).await?;

    if session.payment_status != transaction.payment_status
        || transaction.status.as_deref() != Some(session.status.as_str())
    {
        let previous = TransactionRepo::update_status(
            &state.db,
            &session_id,
            &session.payment_status,
            &session.status,
        )
        .await?;
        if previous != "paid" && session.payment_status == "paid" {
            tracing::info!(
                session_id = %session_id,
                package_id = %transaction.package_id,
                "payment confirmed, credits granted"
            );
        }
    }

    let package = find_package(&transaction.package_id);
    let credits_added = if session.payment_status == "paid" {
        package.map(|p| p.credits)
    } else {
        None
    };

    Ok(Json(PaymentStatusResponse {
        success: true,
        payment_status: session.payment_status,
        status: session.status,
        amount_total: session.amount_total as f64 / 100.0,
        currency: session.currency,
        package_info: package.map(package_info).unwrap_or(serde_json::Value::Null),
        credits_added,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookResponse {
    pub success: bool,
    pub event_processed: bool,
}

/// POST /api/payments/webhook
///
/// Verified against the raw body; the JSON is only parsed after the
/// signature checks out.
pub async fn handle_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let signature = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::BadRequest("Missing Stripe signature".to_string()))?;
    let secret = state
        .config
        .stripe_webhook_secret
        .as_deref()
        .ok_or(AppError::PaymentNotConfigured)?;

    verify_signature(&body, signature, secret)?;
    let event = parse_event(&body)?;

    if event.event_type == "checkout.session.completed" {
        let payment_status = event.payment_status.as_deref().unwrap_or("paid");
        match TransactionRepo::mark_webhook_processed(&state.db, &event.session_id, payment_status)
            .await
        {
            Ok(()) => {
                tracing::info!(session_id = %event.session_id, "checkout completed via webhook");
            }
            Err(CoreError::NotFound { .. }) => {
                tracing::warn!(
                    session_id = %event.session_id,
                    "webhook for unknown checkout session"
                );
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        tracing::debug!(event_type = %event.event_type, "ignoring webhook event");
    }

    Ok(Json(WebhookResponse {
        success: true,
        event_processed: true,
    }))
}

/// Client-facing projection of a package, without the internal id.
fn package_info(package: &Package) -> serde_json::Value {
    json!({
        "name": package.name,
        "amount": package.amount,
        "currency": package.currency,
        "credits": package.credits,
        "duration": package.duration,
    })
}
