//! Generation records and the wire DTOs for the generation endpoints.

use chrono::{DateTime, Utc};
use nanoedit_core::generation::{GenerationMode, GenerationStatus, ESTIMATED_TIME_HINT};
use nanoedit_core::pagination::Pagination;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Stored record
// ---------------------------------------------------------------------------

/// A generation request for its full life: created at intake with
/// `Processing`, transitioned exactly once to `Completed` or `Failed` by the
/// background task, read-only ever after.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    pub id: Uuid,
    pub session_id: String,
    pub prompt: String,
    pub mode: GenerationMode,
    pub status: GenerationStatus,
    pub created_at: DateTime<Utc>,
    /// Output artifact references; populated only on completion.
    pub outputs: Vec<String>,
    /// Wall-clock processing time; populated only on completion.
    pub processing_time_ms: Option<u64>,
    /// Failure cause; populated only on failure.
    pub error: Option<String>,
}

impl GenerationRecord {
    /// Fresh record in the initial `Processing` state.
    pub fn new(prompt: String, mode: GenerationMode, session_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_id,
            prompt,
            mode,
            status: GenerationStatus::Processing,
            created_at: Utc::now(),
            outputs: Vec::new(),
            processing_time_ms: None,
            error: None,
        }
    }

    /// Public projection returned by status queries.
    pub fn view(&self) -> GenerationView {
        GenerationView {
            id: self.id,
            status: self.status,
            prompt: self.prompt.clone(),
            mode: self.mode,
            session_id: self.session_id.clone(),
            outputs: if self.outputs.is_empty() {
                None
            } else {
                Some(self.outputs.clone())
            },
            processing_time_ms: self.processing_time_ms,
            error: self.error.clone(),
            created_at: self.created_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Body for `POST /api/generate`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub mode: Option<GenerationMode>,
    #[serde(default)]
    pub session_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// Response for `POST /api/generate`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    pub message: String,
    pub generation_id: Uuid,
    pub status: GenerationStatus,
    pub estimated_time: String,
}

impl GenerateResponse {
    pub fn started(generation_id: Uuid) -> Self {
        Self {
            success: true,
            message: "Generation started".to_string(),
            generation_id,
            status: GenerationStatus::Processing,
            estimated_time: ESTIMATED_TIME_HINT.to_string(),
        }
    }
}

/// Public projection of a [`GenerationRecord`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationView {
    pub id: Uuid,
    pub status: GenerationStatus,
    pub prompt: String,
    pub mode: GenerationMode,
    pub session_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Response for `GET /api/generate/{id}`.
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub success: bool,
    pub generation: GenerationView,
}

/// Response for `GET /api/generate/history/{sessionId}`.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub success: bool,
    pub generations: Vec<GenerationView>,
    pub pagination: Pagination,
}

/// Metadata for a stored upload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: String,
    pub file_name: String,
    pub original_name: String,
    pub size: usize,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

/// Response for `POST /api/generate/upload`.
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub file: UploadedFile,
}
