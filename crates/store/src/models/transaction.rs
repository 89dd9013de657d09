//! Payment transaction records and the wire DTOs for the payment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A checkout transaction, keyed by its Stripe session id. Created as
/// `pending` when the session is opened; the status endpoint and the
/// webhook both move it forward.
#[derive(Debug, Clone)]
pub struct PaymentTransaction {
    pub session_id: String,
    pub package_id: String,
    pub amount: f64,
    pub currency: String,
    pub payment_status: String,
    pub status: Option<String>,
    pub webhook_processed: bool,
    pub metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PaymentTransaction {
    /// Fresh pending transaction.
    pub fn pending(
        session_id: String,
        package_id: String,
        amount: f64,
        currency: String,
        metadata: serde_json::Value,
    ) -> Self {
        let now = Utc::now();
        Self {
            session_id,
            package_id,
            amount,
            currency,
            payment_status: "pending".to_string(),
            status: None,
            webhook_processed: false,
            metadata,
            created_at: now,
            updated_at: now,
        }
    }
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /api/payments/checkout`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    pub package_id: String,
    /// Frontend origin used to build success/cancel redirect URLs.
    pub origin_url: String,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// Response for `POST /api/payments/checkout`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub success: bool,
    pub checkout_url: String,
    pub session_id: String,
    pub package_info: serde_json::Value,
}

/// Response for `GET /api/payments/status/{sessionId}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentStatusResponse {
    pub success: bool,
    pub payment_status: String,
    pub status: String,
    pub amount_total: f64,
    pub currency: String,
    pub package_info: serde_json::Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credits_added: Option<nanoedit_core::payments::Credits>,
}
