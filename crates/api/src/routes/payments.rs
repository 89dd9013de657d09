//! Route definitions for payments.
//!
//! ```text
//! GET  /packages               get_packages
//! POST /checkout               create_checkout
//! GET  /status/{session_id}    get_payment_status
//! POST /webhook/stripe         handle_webhook
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::payments;
use crate::state::AppState;

/// Routes nested under `/api/payments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/packages", get(payments::get_packages))
        .route("/checkout", post(payments::create_checkout))
        .route("/status/{session_id}", get(payments::get_payment_status))
        .route("/webhook/stripe", post(payments::handle_webhook))
}
