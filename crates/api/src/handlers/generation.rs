//! Handlers for the generation lifecycle.
//!
//! Routes:
//! - `POST /generate`                        — intake (validate, enqueue, ack)
//! - `GET  /generate/{id}`                   — status query (poll)
//! - `GET  /generate/history/{session_id}`   — session history
//! - `POST /generate/upload`                 — reference image upload

use axum::extract::{Multipart, Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use nanoedit_core::error::CoreError;
use nanoedit_core::files as file_rules;
use nanoedit_core::generation::validate_prompt;
use nanoedit_core::pagination::{paginate, DEFAULT_LIMIT};
use nanoedit_store::models::generation::{
    GenerateRequest, GenerateResponse, GenerationRecord, HistoryResponse, StatusResponse,
    UploadResponse, UploadedFile,
};
use nanoedit_store::repositories::GenerationRepo;
use serde::Deserialize;
use uuid::Uuid;

use crate::background;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/generate
///
/// Validates the prompt, creates the record in its initial `Processing`
/// state, schedules exactly one background task, and acknowledges without
/// waiting for it. Validation failures leave no record behind.
pub async fn start_generation(
    State(state): State<AppState>,
    Json(input): Json<GenerateRequest>,
) -> AppResult<impl IntoResponse> {
    validate_prompt(&input.prompt)?;

    let mode = input.mode.unwrap_or_default();
    let session_id = input
        .session_id
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let record = GenerationRecord::new(input.prompt.clone(), mode, session_id);
    let generation_id = record.id;
    GenerationRepo::create(&state.db, record).await?;

    background::generation::spawn(state.clone(), generation_id, input.prompt, mode);

    tracing::info!(generation_id = %generation_id, "Generation accepted");

    Ok(Json(GenerateResponse::started(generation_id)))
}

/// GET /api/generate/{id}
///
/// Read-only snapshot of the record; safe to poll arbitrarily often.
/// Unknown ids are a 404 — there is deliberately no mock fallback record.
pub async fn get_status(
    State(state): State<AppState>,
    Path(generation_id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let record = GenerationRepo::find_by_id(&state.db, generation_id)
        .await
        .ok_or_else(|| CoreError::not_found("Generation", generation_id))?;

    Ok(Json(StatusResponse {
        success: true,
        generation: record.view(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<usize>,
    pub skip: Option<usize>,
}

/// GET /api/generate/history/{session_id}
pub async fn get_history(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let skip = params.skip.unwrap_or(0);

    let records = GenerationRepo::list_for_session(&state.db, &session_id).await;
    let views: Vec<_> = records.iter().map(GenerationRecord::view).collect();
    let (generations, pagination) = paginate(views, skip, limit);

    Ok(Json(HistoryResponse {
        success: true,
        generations,
        pagination,
    }))
}

/// POST /api/generate/upload
///
/// Accepts a multipart form with an `image` field (image/* only, 10 MB
/// cap) and stores it under a fresh UUID-based name in the flat uploads
/// directory.
pub async fn upload_reference_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<impl IntoResponse> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("image") {
            // sessionId and any other form fields are accepted and ignored.
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !file_rules::is_image_content_type(&content_type) {
            return Err(CoreError::Validation("Only image files are allowed".to_string()).into());
        }

        let original_name = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        if bytes.len() > file_rules::MAX_UPLOAD_BYTES {
            return Err(CoreError::Validation(
                "File too large. Maximum size is 10MB".to_string(),
            )
            .into());
        }

        upload = Some((original_name, bytes.to_vec()));
    }

    let (original_name, bytes) =
        upload.ok_or_else(|| AppError::BadRequest("image field is required".to_string()))?;

    let file_id = Uuid::new_v4();
    let file_name = file_rules::stored_filename(&original_name, file_id);
    let path = state.config.uploads_dir.join(&file_name);
    let size = bytes.len();

    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to store upload: {e}")))?;

    tracing::info!(file_name = %file_name, size, "Reference image uploaded");

    Ok(Json(UploadResponse {
        success: true,
        message: "Image uploaded successfully".to_string(),
        file: UploadedFile {
            id: file_id.to_string(),
            url: format!("/api/files/{file_name}"),
            file_name,
            original_name,
            size,
            uploaded_at: Utc::now(),
        },
    }))
}
