//! Handlers for the static content catalog (features, reviews, FAQs, stats).

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use nanoedit_core::content::{
    Faq, Feature, Review, AVERAGE_PROCESSING_TIME, MODEL_VERSION, TOTAL_GENERATIONS_SEED,
};
use nanoedit_store::repositories::{GalleryRepo, GenerationRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FeaturesResponse {
    pub success: bool,
    pub features: Vec<Feature>,
}

/// GET /api/content/features
pub async fn get_features(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(FeaturesResponse {
        success: true,
        features: state.content.active_features(),
    }))
}

#[derive(Debug, Serialize)]
pub struct ReviewsResponse {
    pub success: bool,
    pub reviews: Vec<Review>,
}

/// GET /api/content/reviews
pub async fn get_reviews(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(ReviewsResponse {
        success: true,
        reviews: state.content.reviews_newest_first(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct FaqParams {
    pub category: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FaqsResponse {
    pub success: bool,
    pub faqs: Vec<Faq>,
    pub categories: Vec<&'static str>,
}

/// GET /api/content/faqs
pub async fn get_faqs(
    State(state): State<AppState>,
    Query(params): Query<FaqParams>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(FaqsResponse {
        success: true,
        faqs: state.content.faqs(params.category.as_deref()),
        categories: state.content.faq_categories(),
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub total_generations: u64,
    pub public_gallery: usize,
    pub average_processing_time: &'static str,
    pub model_version: &'static str,
    pub uptime: &'static str,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub success: bool,
    pub stats: ServiceStats,
}

/// GET /api/content/stats
///
/// Mostly fixed demo numbers; the generation counter tracks records
/// actually created in this process on top of the seed value.
pub async fn get_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let generations = GenerationRepo::count(&state.db).await as u64;
    let gallery_size = GalleryRepo::list(&state.db).await.len();

    Ok(Json(StatsResponse {
        success: true,
        stats: ServiceStats {
            total_generations: TOTAL_GENERATIONS_SEED + generations,
            public_gallery: gallery_size,
            average_processing_time: AVERAGE_PROCESSING_TIME,
            model_version: MODEL_VERSION,
            uptime: "operational",
            last_updated: Utc::now(),
        },
    }))
}
