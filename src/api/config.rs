//! API client configuration

use serde::{Deserialize, Serialize};

/// Configuration for the HTTP collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the product API (default: "http://localhost:5000")
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at the given base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Join an endpoint path onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_defaults_apply_on_empty_json() {
        let config: ApiConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::with_base_url("http://localhost:5000/");
        assert_eq!(
            config.endpoint("/api/products"),
            "http://localhost:5000/api/products"
        );
    }
}
