//! Route definitions for uploaded file serving and maintenance.
//!
//! ```text
//! GET    /admin/stats      get_storage_stats
//! POST   /admin/cleanup    cleanup_old_files
//! GET    /{filename}       serve_file
//! DELETE /{filename}       delete_file
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// Routes nested under `/api/files`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/stats", get(files::get_storage_stats))
        .route("/admin/cleanup", post(files::cleanup_old_files))
        .route(
            "/{filename}",
            get(files::serve_file).delete(files::delete_file),
        )
}
