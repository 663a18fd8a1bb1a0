use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_DOCUMENT_BYTES: usize = 10 * 1024 * 1024;
const DEFAULT_MAX_EXTRACTED_BYTES: usize = 64 * 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub fetch_timeout: Duration,
    pub max_document_bytes: usize,
    /// Upper bound on decompressed container parts (DOCX body XML).
    pub max_extracted_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            fetch_timeout: Duration::from_secs(
                parse_env("FETCH_TIMEOUT_SECS", DEFAULT_FETCH_TIMEOUT_SECS)
                    .context("FETCH_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
            max_document_bytes: parse_env("MAX_DOCUMENT_BYTES", DEFAULT_MAX_DOCUMENT_BYTES)
                .context("MAX_DOCUMENT_BYTES must be a byte count")?,
            max_extracted_bytes: parse_env("MAX_EXTRACTED_BYTES", DEFAULT_MAX_EXTRACTED_BYTES)
                .context("MAX_EXTRACTED_BYTES must be a byte count")?,
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value '{raw}' for '{key}'")),
        Err(_) => Ok(default),
    }
}
