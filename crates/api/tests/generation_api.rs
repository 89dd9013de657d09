//! HTTP-level integration tests for the `/api/generate` endpoints.
//!
//! Test configs use a zero millisecond simulated delay so background
//! generation tasks settle as soon as the runtime polls them; the slow
//! variant pins a delay long enough that a poll observes `processing`.

mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app, get, multipart_body, post_json, post_multipart,
    test_config,
};
use nanoedit_core::generation::{categorize_prompt, output_pool, Category};
use nanoedit_store::repositories::GenerationRepo;
use serde_json::json;

/// Poll the status endpoint until the generation reaches a terminal state.
async fn poll_until_terminal(
    app: axum::Router,
    id: &str,
) -> serde_json::Value {
    for _ in 0..200 {
        let response = get(app.clone(), &format!("/api/generate/{id}")).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        let status = json["generation"]["status"].as_str().unwrap().to_string();
        if status != "processing" {
            return json;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    panic!("generation never reached a terminal state");
}

// ---------------------------------------------------------------------------
// Test: POST /api/generate acknowledges a valid prompt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn valid_prompt_is_acknowledged() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(
        app,
        "/api/generate",
        json!({"prompt": "A castle above the clouds"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Generation started");
    assert_eq!(json["estimatedTime"], "0.8-2 seconds");
    assert!(json["generationId"].as_str().unwrap().parse::<uuid::Uuid>().is_ok());
}

// ---------------------------------------------------------------------------
// Test: status is processing immediately after intake (long delay config)
// ---------------------------------------------------------------------------

#[tokio::test]
async fn status_is_processing_before_completion() {
    let uploads = tempfile::tempdir().unwrap();
    let mut config = test_config(uploads.path().to_path_buf());
    config.min_generation_delay_ms = 60_000;
    config.max_generation_delay_ms = 60_000;
    let (app, _state) = build_test_app(config);

    let response = post_json(
        app.clone(),
        "/api/generate",
        json!({"prompt": "A quiet beach at dawn"}),
    )
    .await;
    let id = body_json(response).await["generationId"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get(app, &format!("/api/generate/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["generation"]["status"], "processing");
    assert!(json["generation"].get("outputs").is_none());
}

// ---------------------------------------------------------------------------
// Test: generation completes and polling stays idempotent
// ---------------------------------------------------------------------------

#[tokio::test]
async fn generation_completes_and_polls_are_idempotent() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(
        app.clone(),
        "/api/generate",
        json!({"prompt": "Snowy mountain peak at sunrise"}),
    )
    .await;
    let id = body_json(response).await["generationId"]
        .as_str()
        .unwrap()
        .to_string();

    let first = poll_until_terminal(app.clone(), &id).await;
    assert_eq!(first["generation"]["status"], "completed");
    assert!(first["generation"]["processingTimeMs"].is_u64());

    let outputs = first["generation"]["outputs"].as_array().unwrap();
    assert_eq!(outputs.len(), 1);

    // The output comes from the pool matching the prompt's category.
    assert_eq!(categorize_prompt("Snowy mountain peak at sunrise"), Category::Mountain);
    let pool = output_pool(Category::Mountain);
    assert!(pool.contains(&outputs[0].as_str().unwrap()));

    // Further polls observe the same terminal snapshot.
    let second = poll_until_terminal(app, &id).await;
    assert_eq!(second["generation"]["outputs"], first["generation"]["outputs"]);
    assert_eq!(
        second["generation"]["processingTimeMs"],
        first["generation"]["processingTimeMs"]
    );
}

// ---------------------------------------------------------------------------
// Test: short prompt is rejected and leaves no record
// ---------------------------------------------------------------------------

#[tokio::test]
async fn short_prompt_is_rejected_without_record() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(app, "/api/generate", json!({"prompt": "hi"})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PROMPT").await;

    assert_eq!(GenerationRepo::count(&state.db).await, 0);
}

// ---------------------------------------------------------------------------
// Test: whitespace padding does not rescue a short prompt
// ---------------------------------------------------------------------------

#[tokio::test]
async fn padded_short_prompt_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(app, "/api/generate", json!({"prompt": "  a  "})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "INVALID_PROMPT").await;
}

// ---------------------------------------------------------------------------
// Test: over-long prompt is rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn long_prompt_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = post_json(app, "/api/generate", json!({"prompt": "A".repeat(600)})).await;
    assert_error(response, StatusCode::BAD_REQUEST, "PROMPT_TOO_LONG").await;

    assert_eq!(GenerationRepo::count(&state.db).await, 0);
}

// ---------------------------------------------------------------------------
// Test: unknown generation id is a 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_generation_id_is_404() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = get(
        app,
        &format!("/api/generate/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: concurrent intakes stay independent and both settle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn concurrent_generations_settle_independently() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let first = post_json(
        app.clone(),
        "/api/generate",
        json!({"prompt": "City skyline at night", "sessionId": "sess-1"}),
    )
    .await;
    let second = post_json(
        app.clone(),
        "/api/generate",
        json!({"prompt": "Aurora over a frozen lake", "sessionId": "sess-1"}),
    )
    .await;

    let first_id = body_json(first).await["generationId"]
        .as_str()
        .unwrap()
        .to_string();
    let second_id = body_json(second).await["generationId"]
        .as_str()
        .unwrap()
        .to_string();
    assert_ne!(first_id, second_id);

    let first = poll_until_terminal(app.clone(), &first_id).await;
    let second = poll_until_terminal(app.clone(), &second_id).await;
    assert_eq!(first["generation"]["status"], "completed");
    assert_eq!(second["generation"]["status"], "completed");

    // Both show up in the shared session's history, newest first.
    let response = get(app, "/api/generate/history/sess-1").await;
    let json = body_json(response).await;
    let generations = json["generations"].as_array().unwrap();
    assert_eq!(generations.len(), 2);
    assert_eq!(json["pagination"]["total"], 2);
    assert_eq!(json["pagination"]["hasMore"], false);
}

// ---------------------------------------------------------------------------
// Test: history pagination
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_paginates() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    for i in 0..3 {
        let response = post_json(
            app.clone(),
            "/api/generate",
            json!({"prompt": format!("Prompt number {i}"), "sessionId": "sess-p"}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = get(app.clone(), "/api/generate/history/sess-p?limit=2").await;
    let json = body_json(response).await;
    assert_eq!(json["generations"].as_array().unwrap().len(), 2);
    assert_eq!(json["pagination"]["total"], 3);
    assert_eq!(json["pagination"]["hasMore"], true);

    let response = get(app, "/api/generate/history/sess-p?limit=2&skip=2").await;
    let json = body_json(response).await;
    assert_eq!(json["generations"].as_array().unwrap().len(), 1);
    assert_eq!(json["pagination"]["hasMore"], false);
}

// ---------------------------------------------------------------------------
// Test: reference image upload stores the file under a fresh name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn reference_image_upload_round_trips() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let boundary = "X-NANOEDIT-TEST-BOUNDARY";
    let body = multipart_body(boundary, "image", "ref.png", "image/png", b"fake png bytes");
    let response = post_multipart(app.clone(), "/api/generate/upload", boundary, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Image uploaded successfully");
    assert_eq!(json["file"]["originalName"], "ref.png");
    assert_eq!(json["file"]["size"], 14);

    let file_name = json["file"]["fileName"].as_str().unwrap().to_string();
    assert!(file_name.ends_with(".png"));
    assert_eq!(
        json["file"]["url"],
        format!("/api/files/{file_name}")
    );
    assert!(uploads.path().join(&file_name).exists());

    // The stored file is served back through /api/files.
    let response = get(app, &format!("/api/files/{file_name}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("image/png")
    );
}

// ---------------------------------------------------------------------------
// Test: non-image uploads are rejected
// ---------------------------------------------------------------------------

#[tokio::test]
async fn non_image_upload_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let boundary = "X-NANOEDIT-TEST-BOUNDARY";
    let body = multipart_body(boundary, "image", "notes.txt", "text/plain", b"hello");
    let response = post_multipart(app, "/api/generate/upload", boundary, body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR").await;
}

// ---------------------------------------------------------------------------
// Test: upload without an image field is a 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upload_without_image_field_is_rejected() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let boundary = "X-NANOEDIT-TEST-BOUNDARY";
    let body = multipart_body(boundary, "sessionId", "", "text/plain", b"sess-1");
    let response = post_multipart(app, "/api/generate/upload", boundary, body).await;
    assert_error(response, StatusCode::BAD_REQUEST, "BAD_REQUEST").await;
}

// ---------------------------------------------------------------------------
// Test: history of an unknown session is empty, not an error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn history_of_unknown_session_is_empty() {
    let uploads = tempfile::tempdir().unwrap();
    let (app, _state) = build_test_app(test_config(uploads.path().to_path_buf()));

    let response = get(app, "/api/generate/history/never-seen").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert!(json["generations"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 0);
}
