//! Repository for gallery items.
//!
//! Item metadata is the immutable seed data from `nanoedit-core`; only the
//! like counters live in the store. Reads fold the live counter back into
//! the returned items.

use nanoedit_core::error::CoreError;
use nanoedit_core::gallery::{self, GalleryItem};

use crate::Db;

pub struct GalleryRepo;

impl GalleryRepo {
    /// All gallery items with their current like counts, in seed order.
    pub async fn list(db: &Db) -> Vec<GalleryItem> {
        let likes = db.gallery_likes().read().await;
        let mut items = gallery::seed_items();
        for item in &mut items {
            if let Some(&count) = likes.get(&item.id) {
                item.likes = count;
            }
        }
        items
    }

    /// Single item by id, with its current like count.
    pub async fn find_by_id(db: &Db, id: &str) -> Option<GalleryItem> {
        Self::list(db).await.into_iter().find(|item| item.id == id)
    }

    /// Atomically increment an item's like counter, returning the new count.
    pub async fn like(db: &Db, id: &str) -> Result<u64, CoreError> {
        let mut likes = db.gallery_likes().write().await;
        let count = likes
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("GalleryItem", id))?;
        *count += 1;
        Ok(*count)
    }
}
