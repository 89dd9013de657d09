//! Handlers for serving and managing uploaded files.
//!
//! Uploads live in a single flat directory; stored names are UUID-based,
//! so every path is validated against traversal before touching disk.

use std::io::ErrorKind;
use std::time::{Duration, SystemTime};

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use nanoedit_core::error::CoreError;
use nanoedit_core::files::{guess_mime, validate_filename};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Default retention window for cleanup, in days.
const DEFAULT_CLEANUP_DAYS: u64 = 7;

/// GET /api/files/{filename}
pub async fn serve_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_filename(&filename)?;

    let path = state.config.uploads_dir.join(&filename);
    let bytes = match tokio::fs::read(&path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(CoreError::not_found("File", &filename).into());
        }
        Err(err) => {
            return Err(AppError::InternalError(format!(
                "failed to read {}: {err}",
                path.display()
            )));
        }
    };

    let headers = [
        (header::CONTENT_TYPE, guess_mime(&filename).to_string()),
        (header::CACHE_CONTROL, "public, max-age=86400".to_string()),
        (header::ETAG, format!("\"{filename}\"")),
    ];
    Ok((headers, bytes))
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: &'static str,
}

/// DELETE /api/files/{filename}
///
/// Idempotent: deleting a file that is already gone still succeeds.
pub async fn delete_file(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> AppResult<impl IntoResponse> {
    validate_filename(&filename)?;

    let path = state.config.uploads_dir.join(&filename);
    let message = match tokio::fs::remove_file(&path).await {
        Ok(()) => "File deleted successfully",
        Err(err) if err.kind() == ErrorKind::NotFound => "File already deleted or not found",
        Err(err) => {
            return Err(AppError::InternalError(format!(
                "failed to delete {}: {err}",
                path.display()
            )));
        }
    };

    Ok(Json(DeleteResponse {
        success: true,
        message,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStats {
    pub file_count: usize,
    pub total_size: u64,
    #[serde(rename = "totalSizeMB")]
    pub total_size_mb: f64,
    pub uploads_directory: String,
}

#[derive(Debug, Serialize)]
pub struct StorageStatsResponse {
    pub success: bool,
    pub stats: StorageStats,
}

/// GET /api/files/admin/stats
pub async fn get_storage_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut file_count = 0usize;
    let mut total_size = 0u64;

    let mut entries = tokio::fs::read_dir(&state.config.uploads_dir)
        .await
        .map_err(|err| AppError::InternalError(format!("failed to read uploads dir: {err}")))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|err| AppError::InternalError(format!("failed to read uploads dir: {err}")))?
    {
        let meta = match entry.metadata().await {
            Ok(meta) => meta,
            Err(_) => continue,
        };
        if meta.is_file() {
            file_count += 1;
            total_size += meta.len();
        }
    }

    let total_size_mb = (total_size as f64 / (1024.0 * 1024.0) * 100.0).round() / 100.0;
    Ok(Json(StorageStatsResponse {
        success: true,
        stats: StorageStats {
            file_count,
            total_size,
            total_size_mb,
            uploads_directory: state.config.uploads_dir.display().to_string(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct CleanupParams {
    pub days: Option<u64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupResponse {
    pub success: bool,
    pub message: String,
    pub deleted_files: usize,
}

/// POST /api/files/admin/cleanup
///
/// Deletes uploads whose modification time is older than the retention
/// window (`days` query parameter, default 7).
pub async fn cleanup_old_files(
    State(state): State<AppState>,
    Query(params): Query<CleanupParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days.unwrap_or(DEFAULT_CLEANUP_DAYS);
    let cutoff = SystemTime::now()
        .checked_sub(Duration::from_secs(days * 24 * 60 * 60))
        .unwrap_or(SystemTime::UNIX_EPOCH);

    let mut deleted_files = 0usize;
    let mut entries = tokio::fs::read_dir(&state.config.uploads_dir)
        .await
        .map_err(|err| AppError::InternalError(format!("failed to read uploads dir: {err}")))?;
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|err| AppError::InternalError(format!("failed to read uploads dir: {err}")))?
    {
        let meta = match entry.metadata().await {
            Ok(meta) => meta,
            Err(_) => continue,
        };
        if !meta.is_file() {
            continue;
        }
        let modified = match meta.modified() {
            Ok(modified) => modified,
            Err(_) => continue,
        };
        if modified < cutoff && tokio::fs::remove_file(entry.path()).await.is_ok() {
            deleted_files += 1;
        }
    }

    tracing::info!(deleted_files, days, "upload cleanup complete");
    Ok(Json(CleanupResponse {
        success: true,
        message: format!("Cleaned up {deleted_files} files older than {days} days"),
        deleted_files,
    }))
}
