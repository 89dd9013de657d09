//! Generation lifecycle domain logic: prompt validation, the status model,
//! and the placeholder "model" that classifies a prompt into a category and
//! picks an output from that category's fixed pool.
//!
//! Everything here is pure. Randomness is injected as a [`rand::Rng`] so
//! callers (and tests) control selection; the artificial processing delay is
//! drawn here but slept in `nanoedit-api`'s background task.

use rand::Rng;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Prompt limits
// ---------------------------------------------------------------------------

/// Minimum prompt length in characters, after trimming whitespace.
pub const MIN_PROMPT_CHARS: usize = 3;
/// Maximum raw prompt length in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

/// Advisory latency hint returned to intake callers. Not a contract.
pub const ESTIMATED_TIME_HINT: &str = "0.8-2 seconds";

/// Lower bound of the simulated processing delay in milliseconds.
pub const MIN_PROCESSING_DELAY_MS: u64 = 800;
/// Upper bound of the simulated processing delay in milliseconds.
pub const MAX_PROCESSING_DELAY_MS: u64 = 2000;

/// A prompt that failed intake validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Prompt must be at least {MIN_PROMPT_CHARS} characters")]
    TooShort,

    #[error("Prompt must be less than {MAX_PROMPT_CHARS} characters")]
    TooLong,
}

/// Validate a generation prompt.
///
/// The minimum applies to the *trimmed* prompt (whitespace padding does not
/// count), the maximum to the raw prompt. Both are checked before any
/// record is created or work scheduled.
pub fn validate_prompt(prompt: &str) -> Result<(), PromptError> {
    if prompt.trim().chars().count() < MIN_PROMPT_CHARS {
        return Err(PromptError::TooShort);
    }
    if prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(PromptError::TooLong);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Modes and statuses
// ---------------------------------------------------------------------------

/// Generation mode requested by the caller. Immutable after intake.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    #[default]
    #[serde(rename = "text-to-image")]
    TextToImage,
    #[serde(rename = "image-to-image")]
    ImageToImage,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::TextToImage => "text-to-image",
            GenerationMode::ImageToImage => "image-to-image",
        }
    }
}

/// Lifecycle state of a generation request.
///
/// State machine: `Processing` is the initial state set at intake; the
/// background task performs exactly one transition to `Completed` or
/// `Failed`. No transition ever leaves a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Processing,
    Completed,
    Failed,
}

impl GenerationStatus {
    /// Whether this status permits no further transitions.
    pub fn is_terminal(self) -> bool {
        !matches!(self, GenerationStatus::Processing)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GenerationStatus::Processing => "processing",
            GenerationStatus::Completed => "completed",
            GenerationStatus::Failed => "failed",
        }
    }
}

// ---------------------------------------------------------------------------
// Prompt categorization and mock output pools
// ---------------------------------------------------------------------------

/// Prompt category used to select a mock output pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Mountain,
    Garden,
    Aurora,
    Beach,
    City,
    Default,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Mountain => "mountain",
            Category::Garden => "garden",
            Category::Aurora => "aurora",
            Category::Beach => "beach",
            Category::City => "city",
            Category::Default => "default",
        }
    }
}

const MOUNTAIN_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1494806812796-244fe51b774d?w=800&q=80",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&q=80",
];

const GARDEN_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1563714193017-5a5fb60bc02b?w=800&q=80",
    "https://images.unsplash.com/photo-1416879595882-3373a0480b5b?w=800&q=80",
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800&q=80",
];

const AURORA_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=800&q=80",
    "https://images.unsplash.com/photo-1483347756197-71ef80e95f73?w=800&q=80",
    "https://images.unsplash.com/photo-1446776877081-d282a0f896e2?w=800&q=80",
];

const BEACH_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1665613252734-7ed473dce464?w=800&q=80",
    "https://images.unsplash.com/photo-1507525428034-b723cf961d3e?w=800&q=80",
    "https://images.unsplash.com/photo-1544551763-46a013bb70d5?w=800&q=80",
];

const CITY_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1449824913935-59a10b8d2000?w=800&q=80",
    "https://images.unsplash.com/photo-1514565131-fce0801e5785?w=800&q=80",
    "https://images.unsplash.com/photo-1480714378408-67cf0d13bc1f?w=800&q=80",
];

const DEFAULT_POOL: &[&str] = &[
    "https://images.unsplash.com/photo-1518709268805-4e9042af2ac1?w=800&q=80",
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800&q=80",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800&q=80",
];

/// Classify a prompt by case-insensitive keyword containment.
///
/// First matching category wins; prompts matching nothing fall back to
/// [`Category::Default`].
pub fn categorize_prompt(prompt: &str) -> Category {
    let lower = prompt.to_lowercase();
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if contains_any(&["mountain", "peak", "snow"]) {
        Category::Mountain
    } else if contains_any(&["garden", "flower", "plant"]) {
        Category::Garden
    } else if contains_any(&["aurora", "northern light", "borealis"]) {
        Category::Aurora
    } else if contains_any(&["beach", "ocean", "sea"]) {
        Category::Beach
    } else if contains_any(&["city", "urban", "building"]) {
        Category::City
    } else {
        Category::Default
    }
}

/// The fixed output pool for a category.
pub fn output_pool(category: Category) -> &'static [&'static str] {
    match category {
        Category::Mountain => MOUNTAIN_POOL,
        Category::Garden => GARDEN_POOL,
        Category::Aurora => AURORA_POOL,
        Category::Beach => BEACH_POOL,
        Category::City => CITY_POOL,
        Category::Default => DEFAULT_POOL,
    }
}

/// Pick one output reference from the category's pool.
pub fn select_output(category: Category, rng: &mut impl Rng) -> &'static str {
    let pool = output_pool(category);
    pool[rng.random_range(0..pool.len())]
}

/// Draw a simulated processing delay from `[min_ms, max_ms]`, uniformly.
///
/// Degenerate ranges (`min >= max`) collapse to `min`, which tests use to
/// make the background task effectively instantaneous.
pub fn draw_processing_delay_ms(min_ms: u64, max_ms: u64, rng: &mut impl Rng) -> u64 {
    if min_ms >= max_ms {
        min_ms
    } else {
        rng.random_range(min_ms..=max_ms)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
