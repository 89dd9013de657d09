//! Stripe webhook signature verification and event parsing.
//!
//! Stripe signs webhook deliveries with an HMAC-SHA256 over
//! `"{timestamp}.{payload}"` and sends the result in the
//! `Stripe-Signature` header as `t=<ts>,v1=<hex>[,v1=<hex>...]`.

use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

use crate::StripeError;

type HmacSha256 = Hmac<Sha256>;

/// Maximum accepted age of a signed payload, guarding against replays.
const TIMESTAMP_TOLERANCE_SECS: i64 = 300;

/// A parsed webhook event, reduced to the fields the backend acts on.
#[derive(Debug, Clone)]
pub struct WebhookEvent {
    /// Event type, e.g. `checkout.session.completed`.
    pub event_type: String,
    /// Checkout session id the event refers to.
    pub session_id: String,
    /// Payment status carried on the session object, when present.
    pub payment_status: Option<String>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    event_type: String,
    data: RawEventData,
}

#[derive(Deserialize)]
struct RawEventData {
    object: RawSessionObject,
}

#[derive(Deserialize)]
struct RawSessionObject {
    id: String,
    payment_status: Option<String>,
}

/// Verify a `Stripe-Signature` header against the raw request body.
///
/// Checks the `t=` timestamp against the replay tolerance and accepts the
/// payload if any `v1=` candidate matches the expected HMAC. Comparison is
/// constant-time via [`Mac::verify_slice`].
pub fn verify_signature(
    payload: &[u8],
    signature_header: &str,
    webhook_secret: &str,
) -> Result<(), StripeError> {
    let mut timestamp: Option<i64> = None;
    let mut candidates: Vec<&str> = Vec::new();

    for part in signature_header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => {
                timestamp = value.parse().ok();
            }
            Some(("v1", value)) => candidates.push(value),
            _ => {}
        }
    }

    let timestamp = timestamp
        .ok_or_else(|| StripeError::Webhook("missing timestamp in signature header".into()))?;
    if candidates.is_empty() {
        return Err(StripeError::Webhook(
            "missing v1 signature in signature header".into(),
        ));
    }

    let age = (chrono::Utc::now().timestamp() - timestamp).abs();
    if age > TIMESTAMP_TOLERANCE_SECS {
        return Err(StripeError::Webhook(format!(
            "signature timestamp outside tolerance ({age}s old)"
        )));
    }

    let mut mac = HmacSha256::new_from_slice(webhook_secret.as_bytes())
        .map_err(|e| StripeError::Webhook(format!("invalid webhook secret: {e}")))?;
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);

    for candidate in candidates {
        let Some(decoded) = decode_hex(candidate) else {
            continue;
        };
        if mac.clone().verify_slice(&decoded).is_ok() {
            return Ok(());
        }
    }

    Err(StripeError::Webhook("no matching v1 signature".into()))
}

/// Parse a verified webhook payload into a [`WebhookEvent`].
pub fn parse_event(payload: &[u8]) -> Result<WebhookEvent, StripeError> {
    let raw: RawEvent = serde_json::from_slice(payload)
        .map_err(|e| StripeError::Webhook(format!("malformed event payload: {e}")))?;
    Ok(WebhookEvent {
        event_type: raw.event_type,
        session_id: raw.data.object.id,
        payment_status: raw.data.object.payment_status,
    })
}

fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
        .collect()
}
