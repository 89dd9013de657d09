//! Static marketing content: features, reviews, and FAQs.
//!
//! The original site served these from mutable in-memory lists; here the
//! catalog is immutable configuration loaded once at startup and shared via
//! `AppState`. Filtering and sorting are pure functions over the loaded
//! data.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Model name reported in the stats payload.
pub const MODEL_VERSION: &str = "nano-banana-v1";
/// Seed value for the demo "total generations" counter.
pub const TOTAL_GENERATIONS_SEED: u64 = 12_847;
/// Advertised average processing time.
pub const AVERAGE_PROCESSING_TIME: &str = "1.2s";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub content: &'static str,
    pub avatar: &'static str,
    pub rating: u8,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: u32,
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub is_active: bool,
    pub order: u32,
}

/// Immutable content catalog, loaded once at process start.
#[derive(Debug)]
pub struct ContentCatalog {
    features: Vec<Feature>,
    reviews: Vec<Review>,
    faqs: Vec<Faq>,
}

impl ContentCatalog {
    /// Build the catalog from the built-in demo data.
    ///
    /// Panics on malformed built-in timestamps, which is the desired
    /// fail-fast behaviour at startup.
    pub fn load() -> Self {
        Self {
            features: builtin_features(),
            reviews: builtin_reviews(),
            faqs: builtin_faqs(),
        }
    }

    /// Active features, in catalog order.
    pub fn active_features(&self) -> Vec<Feature> {
        self.features.iter().filter(|f| f.is_active).cloned().collect()
    }

    /// All reviews, newest first.
    pub fn reviews_newest_first(&self) -> Vec<Review> {
        let mut reviews = self.reviews.clone();
        reviews.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        reviews
    }

    /// Active FAQs, optionally restricted to one category, sorted by their
    /// display order.
    pub fn faqs(&self, category: Option<&str>) -> Vec<Faq> {
        let mut faqs: Vec<Faq> = self
            .faqs
            .iter()
            .filter(|f| f.is_active)
            .filter(|f| category.map_or(true, |c| f.category == c))
            .cloned()
            .collect();
        faqs.sort_by_key(|f| f.order);
        faqs
    }

    /// Distinct categories across active FAQs, in first-seen order.
    pub fn faq_categories(&self) -> Vec<&'static str> {
        let mut categories = Vec::new();
        for faq in self.faqs.iter().filter(|f| f.is_active) {
            if !categories.contains(&faq.category) {
                categories.push(faq.category);
            }
        }
        categories
    }
}

fn ts(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("built-in content timestamp must be valid RFC 3339")
        .with_timezone(&Utc)
}

fn builtin_features() -> Vec<Feature> {
    vec![
        Feature {
            id: 1,
            title: "Natural Language Editing",
            description: "Edit images using simple text prompts. Nano-banana AI understands complex instructions like GPT for images",
            icon: "💬",
            color: "from-orange-400 to-orange-500",
            is_active: true,
        },
        Feature {
            id: 2,
            title: "Character Consistency",
            description: "Maintain perfect character details across edits. This model excels at preserving faces and identities",
            icon: "🎭",
            color: "from-orange-500 to-red-500",
            is_active: true,
        },
        Feature {
            id: 3,
            title: "Scene Preservation",
            description: "Seamlessly blend edits with original backgrounds. Superior scene fusion compared to Flux Kontext",
            icon: "🎨",
            color: "from-red-500 to-pink-500",
            is_active: true,
        },
        Feature {
            id: 4,
            title: "One-Shot Editing",
            description: "Perfect results in a single attempt. Nano-banana solves one-shot image editing challenges effortlessly",
            icon: "🎯",
            color: "from-orange-400 to-yellow-500",
            is_active: true,
        },
        Feature {
            id: 5,
            title: "Multi-Image Context",
            description: "Process multiple images simultaneously. Support for advanced multi-image editing workflows",
            icon: "📚",
            color: "from-blue-400 to-blue-500",
            is_active: true,
        },
        Feature {
            id: 6,
            title: "AI UGC Creation",
            description: "Create consistent AI influencers and UGC content. Perfect for social media and marketing campaigns",
            icon: "⭐",
            color: "from-purple-400 to-purple-500",
            is_active: true,
        },
    ]
}

fn builtin_reviews() -> Vec<Review> {
    vec![
        Review {
            id: 1,
            name: "AIArtistPro",
            role: "Digital Creator",
            content: "This editor completely changed my workflow. The character consistency is incredible - miles ahead of Flux Kontext!",
            avatar: "AP",
            rating: 5,
            is_verified: true,
            created_at: ts("2024-01-15T00:00:00Z"),
        },
        Review {
            id: 2,
            name: "ContentCreator",
            role: "UGC Specialist",
            content: "Creating consistent AI influencers has never been easier. It maintains perfect face details across edits!",
            avatar: "CC",
            rating: 5,
            is_verified: true,
            created_at: ts("2024-01-18T00:00:00Z"),
        },
        Review {
            id: 3,
            name: "PhotoEditor",
            role: "Professional Editor",
            content: "One-shot editing is basically solved with this tool. The scene blending is so natural and realistic!",
            avatar: "PE",
            rating: 5,
            is_verified: true,
            created_at: ts("2024-01-20T00:00:00Z"),
        },
    ]
}

fn builtin_faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: 1,
            question: "What is Nano Banana?",
            answer: "It's a revolutionary AI image editing model that transforms photos using natural language prompts. This is currently the most powerful image editing model available, with exceptional consistency. It offers superior performance compared to Flux Kontext for consistent character editing and scene preservation.",
            category: "general",
            is_active: true,
            order: 1,
        },
        Faq {
            id: 2,
            question: "How does it work?",
            answer: "Simply upload an image and describe your desired edits in natural language. The AI understands complex instructions like \"place the creature in a snowy mountain\" or \"imagine the whole face and create it\". It processes your text prompt and generates perfectly edited images.",
            category: "usage",
            is_active: true,
            order: 2,
        },
        Faq {
            id: 3,
            question: "How is it better than Flux Kontext?",
            answer: "This model excels in character consistency, scene blending, and one-shot editing. Users report it \"completely destroys\" Flux Kontext in preserving facial features and seamlessly integrating edits with backgrounds. It also supports multi-image context, making it ideal for creating consistent AI influencers.",
            category: "comparison",
            is_active: true,
            order: 3,
        },
        Faq {
            id: 4,
            question: "Can I use it for commercial projects?",
            answer: "Yes! It's perfect for creating AI UGC content, social media campaigns, and marketing materials. Many users leverage it for creating consistent AI influencers and product photography. The high-quality outputs are suitable for professional use.",
            category: "commercial",
            is_active: true,
            order: 4,
        },
        Faq {
            id: 5,
            question: "What types of edits can it handle?",
            answer: "The editor handles complex edits including face completion, background changes, object placement, style transfers, and character modifications. It excels at understanding contextual instructions like \"place in a blizzard\" or \"create the whole face\" while maintaining photorealistic quality.",
            category: "features",
            is_active: true,
            order: 5,
        },
        Faq {
            id: 6,
            question: "Where can I try Nano Banana?",
            answer: "You can try nano-banana on LMArena or through our web interface. Simply upload your image, enter a text prompt describing your desired edits, and watch as nano-banana AI transforms your photo with incredible accuracy and consistency.",
            category: "access",
            is_active: true,
            order: 6,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_loads_all_sections() {
        let catalog = ContentCatalog::load();
        assert_eq!(catalog.active_features().len(), 6);
        assert_eq!(catalog.reviews_newest_first().len(), 3);
        assert_eq!(catalog.faqs(None).len(), 6);
    }

    #[test]
    fn reviews_are_sorted_newest_first() {
        let catalog = ContentCatalog::load();
        let reviews = catalog.reviews_newest_first();
        for pair in reviews.windows(2) {
            assert!(pair[0].created_at >= pair[1].created_at);
        }
    }

    #[test]
    fn faqs_are_sorted_by_order() {
        let catalog = ContentCatalog::load();
        let faqs = catalog.faqs(None);
        for pair in faqs.windows(2) {
            assert!(pair[0].order <= pair[1].order);
        }
    }

    #[test]
    fn faq_category_filter_applies() {
        let catalog = ContentCatalog::load();
        let faqs = catalog.faqs(Some("general"));
        assert_eq!(faqs.len(), 1);
        assert_eq!(faqs[0].id, 1);
    }

    #[test]
    fn unknown_faq_category_yields_empty() {
        let catalog = ContentCatalog::load();
        assert!(catalog.faqs(Some("nonexistent")).is_empty());
    }

    #[test]
    fn categories_are_distinct() {
        let catalog = ContentCatalog::load();
        let categories = catalog.faq_categories();
        assert_eq!(categories.len(), 6);
        let mut deduped = categories.clone();
        deduped.dedup();
        assert_eq!(categories, deduped);
    }
}
