//! Route definitions for the generation lifecycle.
//!
//! ```text
//! POST /                        start_generation
//! GET  /{id}                    get_status
//! GET  /history/{session_id}    get_history
//! POST /upload                  upload_reference_image
//! ```

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use nanoedit_core::files::MAX_UPLOAD_BYTES;

use crate::handlers::generation;
use crate::state::AppState;

/// Multipart framing overhead allowed on top of the file size cap.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes nested under `/api/generate`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(generation::start_generation))
        .route("/{id}", get(generation::get_status))
        .route("/history/{session_id}", get(generation::get_history))
        .route(
            "/upload",
            post(generation::upload_reference_image)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES)),
        )
}
