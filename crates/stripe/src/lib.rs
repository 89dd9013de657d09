//! Stripe Checkout REST client and webhook verification.
//!
//! Wraps the two Stripe surfaces the backend touches: creating and fetching
//! Checkout sessions over the form-encoded REST API, and verifying
//! `Stripe-Signature` headers on incoming webhooks.

pub mod client;
pub mod webhook;

pub use client::{CheckoutSession, CheckoutSessionStatus, CreateSessionParams, StripeClient};
pub use webhook::{parse_event, verify_signature, WebhookEvent};

/// Errors from the Stripe integration layer.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Stripe returned a non-2xx status code.
    #[error("Stripe API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A webhook payload or signature failed verification.
    #[error("Webhook verification failed: {0}")]
    Webhook(String),
}
