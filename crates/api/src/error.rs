use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use nanoedit_core::error::CoreError;
use nanoedit_core::generation::PromptError;
use nanoedit_stripe::StripeError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses
/// of the shape `{"success": false, "error": ..., "code": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `nanoedit-core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A prompt that failed intake validation.
    #[error(transparent)]
    Prompt(#[from] PromptError),

    /// An error from the Stripe integration layer.
    #[error(transparent)]
    Stripe(#[from] StripeError),

    /// Payment endpoints were called without Stripe configuration.
    #[error("Payment system not configured")]
    PaymentNotConfigured,

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Prompt validation ---
            AppError::Prompt(PromptError::TooShort) => (
                StatusCode::BAD_REQUEST,
                "INVALID_PROMPT",
                PromptError::TooShort.to_string(),
            ),
            AppError::Prompt(PromptError::TooLong) => (
                StatusCode::BAD_REQUEST,
                "PROMPT_TOO_LONG",
                PromptError::TooLong.to_string(),
            ),

            // --- Stripe errors ---
            AppError::Stripe(StripeError::Webhook(msg)) => {
                (StatusCode::BAD_REQUEST, "WEBHOOK_ERROR", msg.clone())
            }
            AppError::Stripe(err) => {
                tracing::error!(error = %err, "Stripe request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "PAYMENT_ERROR",
                    "Payment provider request failed".to_string(),
                )
            }

            AppError::PaymentNotConfigured => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "PAYMENT_NOT_CONFIGURED",
                "Payment system not configured".to_string(),
            ),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
