//! Public gallery: seed items plus pure filtering, sorting, and search.
//!
//! Seed metadata is immutable; the live like counter is owned by
//! `nanoedit-store` and folded back into [`GalleryItem`] copies before the
//! helpers here run.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Minimum length of a gallery search query, in characters.
pub const MIN_SEARCH_QUERY_CHARS: usize = 2;

#[derive(Debug, Clone, Serialize)]
pub struct GalleryMetadata {
    pub featured: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub prompt: String,
    pub likes: u64,
    pub created_at: DateTime<Utc>,
    pub processing_time: f64,
    pub metadata: GalleryMetadata,
}

/// Sort order for gallery listings. Unknown values fall back to `Recent`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GallerySort {
    #[default]
    Recent,
    Popular,
    Featured,
}

impl GallerySort {
    pub fn parse(s: &str) -> Self {
        match s {
            "popular" => GallerySort::Popular,
            "featured" => GallerySort::Featured,
            _ => GallerySort::Recent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GallerySort::Recent => "recent",
            GallerySort::Popular => "popular",
            GallerySort::Featured => "featured",
        }
    }
}

/// Sort items in place according to `sort`.
///
/// - `Recent`: newest first.
/// - `Popular`: most likes first.
/// - `Featured`: featured items first, then by likes.
pub fn sort_items(items: &mut [GalleryItem], sort: GallerySort) {
    match sort {
        GallerySort::Recent => items.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        GallerySort::Popular => items.sort_by(|a, b| b.likes.cmp(&a.likes)),
        GallerySort::Featured => items.sort_by(|a, b| {
            (b.metadata.featured, b.likes).cmp(&(a.metadata.featured, a.likes))
        }),
    }
}

/// Case-insensitive containment search over title, description, and prompt.
/// Results come back sorted by likes, most liked first.
pub fn search_items(items: &[GalleryItem], query: &str) -> Vec<GalleryItem> {
    let q = query.to_lowercase();
    let mut results: Vec<GalleryItem> = items
        .iter()
        .filter(|item| {
            item.title.to_lowercase().contains(&q)
                || item.description.to_lowercase().contains(&q)
                || item.prompt.to_lowercase().contains(&q)
        })
        .cloned()
        .collect();
    results.sort_by(|a, b| b.likes.cmp(&a.likes));
    results
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("built-in gallery timestamp must be valid RFC 3339")
        .with_timezone(&Utc)
}

/// Built-in demo gallery items. Likes here are only the starting values;
/// the store owns the live counters.
pub fn seed_items() -> Vec<GalleryItem> {
    vec![
        GalleryItem {
            id: "1".to_string(),
            title: "Ultra-Fast Mountain Generation".to_string(),
            description: "Created in 0.8 seconds with Nano Banana's optimized neural engine"
                .to_string(),
            image: "https://images.unsplash.com/photo-1494806812796-244fe51b774d?w=800&q=80"
                .to_string(),
            prompt: "A majestic snow-capped mountain range at golden hour".to_string(),
            likes: 42,
            created_at: ts("2025-02-04T09:00:00Z"),
            processing_time: 0.8,
            metadata: GalleryMetadata { featured: true },
        },
        GalleryItem {
            id: "2".to_string(),
            title: "Instant Garden Creation".to_string(),
            description: "Complex scene rendered in milliseconds using Nano Banana technology"
                .to_string(),
            image: "https://images.unsplash.com/photo-1563714193017-5a5fb60bc02b?w=800&q=80"
                .to_string(),
            prompt: "A lush garden pathway with vibrant flowers".to_string(),
            likes: 38,
            created_at: ts("2025-02-03T15:30:00Z"),
            processing_time: 1.2,
            metadata: GalleryMetadata { featured: true },
        },
        GalleryItem {
            id: "3".to_string(),
            title: "Real-time Beach Synthesis".to_string(),
            description: "Nano Banana delivers photorealistic results at lightning speed"
                .to_string(),
            image: "https://images.unsplash.com/photo-1665613252734-7ed473dce464?w=800&q=80"
                .to_string(),
            prompt: "A pristine beach with crystal clear waters".to_string(),
            likes: 35,
            created_at: ts("2025-02-02T11:45:00Z"),
            processing_time: 1.0,
            metadata: GalleryMetadata { featured: false },
        },
        GalleryItem {
            id: "4".to_string(),
            title: "Rapid Aurora Generation".to_string(),
            description: "Advanced effects processed instantly with Nano Banana AI".to_string(),
            image: "https://images.unsplash.com/photo-1531366936337-7c912a4589a7?w=800&q=80"
                .to_string(),
            prompt: "Northern lights dancing over a snowy landscape".to_string(),
            likes: 56,
            created_at: ts("2025-02-01T20:15:00Z"),
            processing_time: 0.9,
            metadata: GalleryMetadata { featured: true },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_recent_orders_by_created_at_desc() {
        let mut items = seed_items();
        sort_items(&mut items, GallerySort::Recent);
        assert_eq!(items[0].id, "1");
        assert_eq!(items[3].id, "4");
    }

    #[test]
    fn sort_popular_orders_by_likes_desc() {
        let mut items = seed_items();
        sort_items(&mut items, GallerySort::Popular);
        assert_eq!(items[0].id, "4"); // 56 likes
        assert_eq!(items[3].id, "3"); // 35 likes
    }

    #[test]
    fn sort_featured_puts_featured_first() {
        let mut items = seed_items();
        sort_items(&mut items, GallerySort::Featured);
        assert!(items[0].metadata.featured);
        assert_eq!(items[3].id, "3"); // the only non-featured item sinks
    }

    #[test]
    fn sort_parse_falls_back_to_recent() {
        assert_eq!(GallerySort::parse("popular"), GallerySort::Popular);
        assert_eq!(GallerySort::parse("bogus"), GallerySort::Recent);
    }

    #[test]
    fn search_matches_prompt_case_insensitively() {
        let items = seed_items();
        let results = search_items(&items, "MOUNTAIN");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "1");
    }

    #[test]
    fn search_matches_across_fields_sorted_by_likes() {
        let items = seed_items();
        // "Nano Banana" appears in every description.
        let results = search_items(&items, "nano banana");
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].id, "4");
    }

    #[test]
    fn search_with_no_match_is_empty() {
        let items = seed_items();
        assert!(search_items(&items, "volcano").is_empty());
    }
}
