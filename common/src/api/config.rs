use serde::{Deserialize, Serialize};

use super::error::{ApiError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Where the backend lives. The only piece of environment-driven configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Uses `GENIQ_API_BASE_URL` as set when the crate was compiled, or the
    /// local default.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("GENIQ_API_BASE_URL"))
    }

    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(ApiError::Config("Base URL cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn endpoint_url(&self, endpoint: &str) -> String {
        let endpoint = endpoint.strip_prefix('/').unwrap_or(endpoint);
        let base_url = self.base_url.trim().trim_end_matches('/');
        format!("{base_url}/{endpoint}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_joins_with_single_slash() {
        let config = ClientConfig::new("http://api.test:9000/");
        assert_eq!(config.endpoint_url("/generate/qa"), "http://api.test:9000/generate/qa");
        assert_eq!(config.endpoint_url("health"), "http://api.test:9000/health");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(
            ClientConfig::default().endpoint_url("/health"),
            "http://localhost:8000/health"
        );
    }

    #[test]
    fn blank_override_keeps_default() {
        assert_eq!(ClientConfig::from_override(Some("  ")), ClientConfig::default());
        assert_eq!(ClientConfig::from_override(None), ClientConfig::default());
        assert_eq!(
            ClientConfig::from_override(Some("https://geniq.example")).base_url,
            "https://geniq.example"
        );
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(matches!(ClientConfig::new("").validate(), Err(ApiError::Config(_))));
    }
}
