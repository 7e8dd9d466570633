//! API endpoint configuration.
//!
//! The base URL is passed explicitly to [`crate::api::TriviaClient`]; nothing
//! here reads the environment. The CLI resolves `--api-url` / `TRIVIA_API_URL`.

use reqwest::Url;
use thiserror::Error;

/// Base URL used when neither the flag nor the environment provides one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Environment variable consulted by the CLI for the base URL.
pub const API_URL_ENV: &str = "TRIVIA_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("API base URL is empty")]
    Empty,
    #[error("invalid API base URL {url:?}: {reason}")]
    Invalid { url: String, reason: String },
    #[error("unsupported scheme {0:?} in API base URL (expected http or https)")]
    UnsupportedScheme(String),
}

/// Validated location of the trivia API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Parse and normalize a base URL. Trailing slashes are dropped so that
    /// endpoint paths can be appended verbatim.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::Empty);
        }

        let parsed = Url::parse(trimmed).map_err(|err| ConfigError::Invalid {
            url: trimmed.to_string(),
            reason: err.to_string(),
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path such as `/questions/random`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ApiConfig::new("http://localhost:8000/").unwrap();
        assert_eq!(config.base_url(), "http://localhost:8000");
        assert_eq!(
            config.endpoint("/questions/random"),
            "http://localhost:8000/questions/random"
        );
    }

    #[test]
    fn test_path_prefix_kept() {
        let config = ApiConfig::new("  https://example.com/trivia/api// ").unwrap();
        assert_eq!(
            config.endpoint("/healthz"),
            "https://example.com/trivia/api/healthz"
        );
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(ApiConfig::new(""), Err(ConfigError::Empty)));
        assert!(matches!(ApiConfig::new(" / "), Err(ConfigError::Empty)));
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::Invalid { .. })
        ));
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ConfigError::UnsupportedScheme(scheme)) if scheme == "ftp"
        ));
    }

    #[test]
    fn test_default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url(), DEFAULT_API_URL);
    }
}
