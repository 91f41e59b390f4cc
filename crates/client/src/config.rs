//! Client configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SITESMITH_API_BASE` - Base URL of the backend API, including the
//!   `/api` prefix (e.g. `https://app.example.com/api`)
//!
//! ## Optional
//! - `SITESMITH_TOKEN_FILE` - Path of the persisted credential file
//!   (default: `$HOME/.config/sitesmith/token`)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Client application configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend API base URL (includes the deployment's path prefix)
    pub api_base: Url,
    /// Where the session credential is persisted
    pub token_path: PathBuf,
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SITESMITH_API_BASE` is missing or not a
    /// valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base = parse_api_base(&get_required_env("SITESMITH_API_BASE")?)?;
        let token_path = get_optional_env("SITESMITH_TOKEN_FILE")
            .map_or_else(default_token_path, PathBuf::from);

        Ok(Self {
            api_base,
            token_path,
        })
    }
}

/// Parse and sanity-check the API base URL.
fn parse_api_base(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value)
        .map_err(|e| ConfigError::InvalidEnvVar("SITESMITH_API_BASE".to_owned(), e.to_string()))?;

    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidEnvVar(
            "SITESMITH_API_BASE".to_owned(),
            format!("{value} is not an http(s) base URL"),
        ));
    }

    Ok(url)
}

/// Default credential location under the user's config directory.
fn default_token_path() -> PathBuf {
    std::env::var_os("HOME").map_or_else(
        || PathBuf::from(".sitesmith").join("token"),
        |home| {
            PathBuf::from(home)
                .join(".config")
                .join("sitesmith")
                .join("token")
        },
    )
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
