use std::path::PathBuf;

use nanoedit_core::generation::{MAX_PROCESSING_DELAY_MS, MIN_PROCESSING_DELAY_MS};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Directory for uploaded reference images (default: `uploads`).
    pub uploads_dir: PathBuf,
    /// Lower bound of the simulated generation delay in milliseconds.
    pub min_generation_delay_ms: u64,
    /// Upper bound of the simulated generation delay in milliseconds.
    pub max_generation_delay_ms: u64,
    /// Stripe secret API key. Payment endpoints report the payment system
    /// as unconfigured when absent.
    pub stripe_secret_key: Option<String>,
    /// Stripe webhook signing secret.
    pub stripe_webhook_secret: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOST`                    | `0.0.0.0`               |
    /// | `PORT`                    | `3000`                  |
    /// | `CORS_ORIGINS`            | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`                    |
    /// | `UPLOADS_DIR`             | `uploads`               |
    /// | `MIN_GENERATION_DELAY_MS` | `800`                   |
    /// | `MAX_GENERATION_DELAY_MS` | `2000`                  |
    /// | `STRIPE_SECRET_KEY`       | unset                   |
    /// | `STRIPE_WEBHOOK_SECRET`   | unset                   |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let uploads_dir =
            PathBuf::from(std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".into()));

        let min_generation_delay_ms: u64 = std::env::var("MIN_GENERATION_DELAY_MS")
            .unwrap_or_else(|_| MIN_PROCESSING_DELAY_MS.to_string())
            .parse()
            .expect("MIN_GENERATION_DELAY_MS must be a valid u64");

        let max_generation_delay_ms: u64 = std::env::var("MAX_GENERATION_DELAY_MS")
            .unwrap_or_else(|_| MAX_PROCESSING_DELAY_MS.to_string())
            .parse()
            .expect("MAX_GENERATION_DELAY_MS must be a valid u64");

        let stripe_secret_key = std::env::var("STRIPE_SECRET_KEY").ok().filter(|s| !s.is_empty());
        let stripe_webhook_secret = std::env::var("STRIPE_WEBHOOK_SECRET")
            .ok()
            .filter(|s| !s.is_empty());

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            uploads_dir,
            min_generation_delay_ms,
            max_generation_delay_ms,
            stripe_secret_key,
            stripe_webhook_secret,
        }
    }
}
