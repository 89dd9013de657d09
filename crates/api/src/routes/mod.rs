pub mod content;
pub mod files;
pub mod gallery;
pub mod generation;
pub mod health;
pub mod payments;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Service banner returned from the `/api` root.
#[derive(Serialize)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub version: &'static str,
    pub status: &'static str,
    pub features: &'static [&'static str],
}

/// GET /api/ -- service banner.
pub(crate) async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "Nano Banana API Server",
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
        features: &[
            "AI Image Generation",
            "Gallery Management",
            "Content Delivery",
            "File Uploads",
            "Payment Processing",
        ],
    })
}

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /                                 service banner
///
/// /generate                         start generation (POST)
/// /generate/{id}                    status poll
/// /generate/history/{sessionId}     session history
/// /generate/upload                  reference image upload (POST)
///
/// /content/features                 active features
/// /content/reviews                  reviews, newest first
/// /content/faqs                     FAQs, optional ?category=
/// /content/stats                    service statistics
///
/// /gallery                          list with filters and sorting
/// /gallery/featured/showcase        featured items by likes
/// /gallery/search/query             text search
/// /gallery/{id}                     single item
/// /gallery/{id}/like                like (POST)
///
/// /files/{filename}                 serve (GET), delete (DELETE)
/// /files/admin/stats                storage statistics
/// /files/admin/cleanup              retention cleanup (POST)
///
/// /payments/packages                package catalog
/// /payments/checkout                open checkout session (POST)
/// /payments/status/{sessionId}      payment status poll
/// /payments/webhook/stripe          signed Stripe webhook (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(service_info))
        .nest("/generate", generation::router())
        .nest("/content", content::router())
        .nest("/gallery", gallery::router())
        .nest("/files", files::router())
        .nest("/payments", payments::router())
}
