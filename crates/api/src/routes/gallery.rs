//! Route definitions for the public gallery.
//!
//! ```text
//! GET  /                       list_gallery
//! GET  /featured/showcase      get_featured_showcase
//! GET  /search/query           search_gallery
//! GET  /{id}                   get_gallery_item
//! POST /{id}/like              like_gallery_item
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::gallery;
use crate::state::AppState;

/// Routes nested under `/api/gallery`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::list_gallery))
        .route("/featured/showcase", get(gallery::get_featured_showcase))
        .route("/search/query", get(gallery::search_gallery))
        .route("/{id}", get(gallery::get_gallery_item))
        .route("/{id}/like", post(gallery::like_gallery_item))
}
