//! Background execution of a generation request.
//!
//! Intake schedules exactly one task per accepted request. The task sleeps
//! for the simulated model latency, classifies the prompt, picks an output
//! from the category pool, and performs the record's single terminal
//! transition. Nothing here ever reaches the original caller: outcomes are
//! observable only through status queries, and errors only through the
//! `Failed` state plus logs.

use std::time::{Duration, Instant};

use nanoedit_core::error::CoreError;
use nanoedit_core::generation::{
    categorize_prompt, draw_processing_delay_ms, select_output, GenerationMode,
};
use nanoedit_store::repositories::GenerationRepo;
use uuid::Uuid;

use crate::state::AppState;

/// Schedule background execution for an accepted generation request.
///
/// Returns immediately; the spawned task owns the rest of the lifecycle.
pub fn spawn(
    state: AppState,
    generation_id: Uuid,
    prompt: String,
    mode: GenerationMode,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        process(state, generation_id, prompt, mode).await;
    })
}

async fn process(state: AppState, generation_id: Uuid, prompt: String, mode: GenerationMode) {
    let started = Instant::now();

    let result = match run(&state, &prompt, mode).await {
        Ok(output) => {
            let elapsed_ms = started.elapsed().as_millis() as u64;
            tracing::info!(
                generation_id = %generation_id,
                output = %output,
                elapsed_ms,
                "Generation completed",
            );
            GenerationRepo::complete(&state.db, generation_id, vec![output], elapsed_ms).await
        }
        Err(err) => {
            tracing::error!(
                generation_id = %generation_id,
                error = %err,
                "Generation failed",
            );
            GenerationRepo::fail(&state.db, generation_id, err.to_string()).await
        }
    };

    // A failed terminal write means the record vanished or was already
    // terminal; there is nobody to report to but the log.
    if let Err(err) = result {
        tracing::error!(
            generation_id = %generation_id,
            error = %err,
            "Failed to record generation outcome",
        );
    }
}

/// The simulated generation itself: sleep, classify, pick.
async fn run(state: &AppState, prompt: &str, mode: GenerationMode) -> Result<String, CoreError> {
    // rand's thread RNG is not Send, so draws are scoped to not live
    // across the await.
    let delay_ms = {
        let mut rng = rand::rng();
        draw_processing_delay_ms(
            state.config.min_generation_delay_ms,
            state.config.max_generation_delay_ms,
            &mut rng,
        )
    };
    tokio::time::sleep(Duration::from_millis(delay_ms)).await;

    let category = categorize_prompt(prompt);
    let output = {
        let mut rng = rand::rng();
        select_output(category, &mut rng)
    };

    tracing::debug!(
        category = category.as_str(),
        mode = mode.as_str(),
        delay_ms,
        "Mock model selected output",
    );

    Ok(output.to_string())
}
