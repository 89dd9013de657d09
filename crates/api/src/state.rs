use std::sync::Arc;

use nanoedit_core::content::ContentCatalog;
use nanoedit_store::Db;
use nanoedit_stripe::StripeClient;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory document store (generations, transactions, gallery likes).
    pub db: Db,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Immutable content catalog, loaded once at startup.
    pub content: Arc<ContentCatalog>,
    /// Stripe client; `None` when no secret key is configured.
    pub stripe: Option<Arc<StripeClient>>,
}

impl AppState {
    /// Assemble state from a loaded configuration.
    pub fn new(config: ServerConfig) -> Self {
        let stripe = config
            .stripe_secret_key
            .clone()
            .map(|key| Arc::new(StripeClient::new(key)));
        Self {
            db: Db::new(),
            config: Arc::new(config),
            content: Arc::new(ContentCatalog::load()),
            stripe,
        }
    }
}
