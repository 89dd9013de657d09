//! Route definitions for marketing content.
//!
//! ```text
//! GET /features    get_features
//! GET /reviews     get_reviews
//! GET /faqs        get_faqs
//! GET /stats       get_stats
//! ```

use axum::routing::get;
use axum::Router;

use crate::handlers::content;
use crate::state::AppState;

/// Routes nested under `/api/content`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/features", get(content::get_features))
        .route("/reviews", get(content::get_reviews))
        .route("/faqs", get(content::get_faqs))
        .route("/stats", get(content::get_stats))
}
