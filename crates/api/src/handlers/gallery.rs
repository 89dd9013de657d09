//! Handlers for the public gallery.
//!
//! Item metadata is immutable seed data; only the like counters mutate,
//! atomically, in the store.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use nanoedit_core::error::CoreError;
use nanoedit_core::gallery::{
    search_items, sort_items, GalleryItem, GallerySort, MIN_SEARCH_QUERY_CHARS,
};
use nanoedit_core::pagination::{paginate, Pagination, DEFAULT_LIMIT};
use nanoedit_store::repositories::GalleryRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Default number of items in the featured showcase.
const DEFAULT_SHOWCASE_LIMIT: usize = 4;

#[derive(Debug, Deserialize)]
pub struct GalleryListParams {
    pub limit: Option<usize>,
    pub skip: Option<usize>,
    pub featured: Option<bool>,
    pub sort: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GalleryFilters {
    pub featured: bool,
    pub sort: &'static str,
}

#[derive(Debug, Serialize)]
pub struct GalleryListResponse {
    pub success: bool,
    pub gallery: Vec<GalleryItem>,
    pub pagination: Pagination,
    pub filters: GalleryFilters,
}

/// GET /api/gallery
pub async fn list_gallery(
    State(state): State<AppState>,
    Query(params): Query<GalleryListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let skip = params.skip.unwrap_or(0);
    let featured = params.featured.unwrap_or(false);
    let sort = GallerySort::parse(params.sort.as_deref().unwrap_or_default());

    let mut items = GalleryRepo::list(&state.db).await;
    if featured {
        items.retain(|item| item.metadata.featured);
    }
    sort_items(&mut items, sort);

    let (gallery, pagination) = paginate(items, skip, limit);

    Ok(Json(GalleryListResponse {
        success: true,
        gallery,
        pagination,
        filters: GalleryFilters {
            featured,
            sort: sort.as_str(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct ShowcaseParams {
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct ShowcaseResponse {
    pub success: bool,
    pub showcase: Vec<GalleryItem>,
    pub count: usize,
}

/// GET /api/gallery/featured/showcase
pub async fn get_featured_showcase(
    State(state): State<AppState>,
    Query(params): Query<ShowcaseParams>,
) -> AppResult<impl IntoResponse> {
    let limit = params.limit.unwrap_or(DEFAULT_SHOWCASE_LIMIT);

    let mut items = GalleryRepo::list(&state.db).await;
    items.retain(|item| item.metadata.featured);
    items.sort_by(|a, b| b.likes.cmp(&a.likes));
    items.truncate(limit);

    let count = items.len();
    Ok(Json(ShowcaseResponse {
        success: true,
        showcase: items,
        count,
    }))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItemResponse {
    pub success: bool,
    pub gallery_item: GalleryItem,
}

/// GET /api/gallery/{id}
pub async fn get_gallery_item(
    State(state): State<AppState>,
    Path(gallery_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let item = GalleryRepo::find_by_id(&state.db, &gallery_id)
        .await
        .ok_or_else(|| CoreError::not_found("GalleryItem", &gallery_id))?;

    Ok(Json(GalleryItemResponse {
        success: true,
        gallery_item: item,
    }))
}

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub success: bool,
    pub message: String,
    pub likes: u64,
}

/// POST /api/gallery/{id}/like
pub async fn like_gallery_item(
    State(state): State<AppState>,
    Path(gallery_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let likes = GalleryRepo::like(&state.db, &gallery_id).await?;

    Ok(Json(LikeResponse {
        success: true,
        message: "Liked successfully".to_string(),
        likes,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: String,
    pub limit: Option<usize>,
    pub skip: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub results: Vec<GalleryItem>,
    pub query: String,
    pub pagination: Pagination,
}

/// GET /api/gallery/search/query
pub async fn search_gallery(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    if params.q.trim().chars().count() < MIN_SEARCH_QUERY_CHARS {
        return Err(CoreError::Validation(
            "Search query must be at least 2 characters".to_string(),
        )
        .into());
    }

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);
    let skip = params.skip.unwrap_or(0);

    let items = GalleryRepo::list(&state.db).await;
    let matches = search_items(&items, &params.q);
    let (results, pagination) = paginate(matches, skip, limit);

    Ok(Json(SearchResponse {
        success: true,
        results,
        query: params.q,
        pagination,
    }))
}
