//! REST client for the Stripe Checkout Sessions API.

use serde::Deserialize;

use crate::StripeError;

/// Default Stripe API base URL. Overridable for tests.
const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// HTTP client holding the secret API key.
pub struct StripeClient {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

/// Inputs for creating a Checkout session. Amounts are in the currency's
/// minor unit and always come from the server-side package catalog.
#[derive(Debug, Clone)]
pub struct CreateSessionParams {
    pub amount_cents: i64,
    pub currency: String,
    pub product_name: String,
    pub success_url: String,
    pub cancel_url: String,
    pub metadata: Vec<(String, String)>,
}

/// A newly created Checkout session.
#[derive(Debug, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    /// Hosted checkout page the caller redirects to.
    pub url: String,
}

/// Current state of a Checkout session.
#[derive(Debug, Deserialize)]
pub struct CheckoutSessionStatus {
    pub id: String,
    /// Session status: `open`, `complete`, or `expired`.
    pub status: String,
    /// Payment status: `unpaid`, `paid`, or `no_payment_required`.
    pub payment_status: String,
    pub amount_total: i64,
    pub currency: String,
}

impl StripeClient {
    /// Create a client using the live Stripe API.
    pub fn new(secret_key: String) -> Self {
        Self::with_api_base(secret_key, DEFAULT_API_BASE.to_string())
    }

    /// Create a client against a custom API base (used by tests).
    pub fn with_api_base(secret_key: String, api_base: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key,
            api_base,
        }
    }

    /// Create a Checkout session.
    ///
    /// Sends `POST /v1/checkout/sessions` with a single payment-mode line
    /// item built from the package catalog entry.
    pub async fn create_checkout_session(
        &self,
        params: &CreateSessionParams,
    ) -> Result<CheckoutSession, StripeError> {
        let form = session_form(params);

        let response = self
            .client
            .post(format!("{}/v1/checkout/sessions", self.api_base))
            .bearer_auth(&self.secret_key)
            .form(&form)
            .send()
            .await?;

        let session: CheckoutSession = Self::parse_response(response).await?;
        tracing::debug!(session_id = %session.id, "Created Stripe checkout session");
        Ok(session)
    }

    /// Fetch the current state of a Checkout session.
    pub async fn get_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionStatus, StripeError> {
        let response = self
            .client
            .get(format!(
                "{}/v1/checkout/sessions/{session_id}",
                self.api_base
            ))
            .bearer_auth(&self.secret_key)
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Deserialize a 2xx response body, or surface the status and raw body.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, StripeError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StripeError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json::<T>().await?)
    }
}

/// Build the form-encoded field list for session creation.
///
/// Stripe's REST API uses bracketed field names for nested structures
/// (`line_items[0][price_data][unit_amount]`), so the body is assembled as
/// explicit key/value pairs rather than a serde struct.
fn session_form(params: &CreateSessionParams) -> Vec<(String, String)> {
    let mut form = vec![
        ("mode".to_string(), "payment".to_string()),
        ("success_url".to_string(), params.success_url.clone()),
        ("cancel_url".to_string(), params.cancel_url.clone()),
        (
            "line_items[0][price_data][currency]".to_string(),
            params.currency.clone(),
        ),
        (
            "line_items[0][price_data][product_data][name]".to_string(),
            params.product_name.clone(),
        ),
        (
            "line_items[0][price_data][unit_amount]".to_string(),
            params.amount_cents.to_string(),
        ),
        ("line_items[0][quantity]".to_string(), "1".to_string()),
    ];
    for (key, value) in &params.metadata {
        form.push((format!("metadata[{key}]"), value.clone()));
    }
    form
}
