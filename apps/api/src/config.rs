use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub redis_url: String,
    pub anthropic_api_key: String,
    pub port: u16,
    pub rust_log: String,
    /// Editor-to-preview debounce window advertised to clients.
    pub preview_debounce_ms: u64,
    /// Below this viewport width the preview stops scaling down.
    pub narrow_viewport_px: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            redis_url: require_env("REDIS_URL")?,
            anthropic_api_key: require_env("ANTHROPIC_API_KEY")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            preview_debounce_ms: std::env::var("PREVIEW_DEBOUNCE_MS")
                .unwrap_or_else(|_| "300".to_string())
                .parse::<u64>()
                .context("PREVIEW_DEBOUNCE_MS must be a duration in milliseconds")?,
            narrow_viewport_px: std::env::var("NARROW_VIEWPORT_PX")
                .unwrap_or_else(|_| "1024".to_string())
                .parse::<f64>()
                .context("NARROW_VIEWPORT_PX must be a width in pixels")?,
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
