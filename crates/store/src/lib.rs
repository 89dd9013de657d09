//! In-memory document store for the nanoedit backend.
//!
//! The persistence collaborator behind the API: generation records keyed by
//! id, payment transactions keyed by Stripe session id, and the gallery
//! like counters. Each collection sits behind its own `tokio::sync::RwLock`
//! so many intake/status calls and background writes proceed concurrently;
//! records are independently keyed, so per-collection locking is the only
//! discipline needed.
//!
//! Access goes through the repositories in [`repositories`], which mirror a
//! conventional repo layer: `GenerationRepo::find_by_id(&db, id)` and
//! friends.

pub mod models;
pub mod repositories;

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use models::generation::GenerationRecord;
use models::transaction::PaymentTransaction;

/// Shared store handle. Cheap to clone; all clones see the same data.
#[derive(Clone)]
pub struct Db {
    inner: Arc<DbInner>,
}

struct DbInner {
    generations: RwLock<HashMap<Uuid, GenerationRecord>>,
    transactions: RwLock<HashMap<String, PaymentTransaction>>,
    gallery_likes: RwLock<HashMap<String, u64>>,
}

impl Db {
    /// Create an empty store, with gallery like counters seeded from the
    /// built-in gallery items.
    pub fn new() -> Self {
        let likes = nanoedit_core::gallery::seed_items()
            .into_iter()
            .map(|item| (item.id, item.likes))
            .collect();
        Self {
            inner: Arc::new(DbInner {
                generations: RwLock::new(HashMap::new()),
                transactions: RwLock::new(HashMap::new()),
                gallery_likes: RwLock::new(likes),
            }),
        }
    }

    pub(crate) fn generations(&self) -> &RwLock<HashMap<Uuid, GenerationRecord>> {
        &self.inner.generations
    }

    pub(crate) fn transactions(&self) -> &RwLock<HashMap<String, PaymentTransaction>> {
        &self.inner.transactions
    }

    pub(crate) fn gallery_likes(&self) -> &RwLock<HashMap<String, u64>> {
        &self.inner.gallery_likes
    }
}

impl Default for Db {
    fn default() -> Self {
        Self::new()
    }
}
