//! Frontend configuration module
//!
//! Resolves the REST base URL at compile time; everything else the client
//! needs comes from the backend.

const DEFAULT_API_BASE_URL: &str = "/api";

/// Frontend configuration for service URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the TutorHive REST API.
    pub api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TUTORHIVE_API_URL")
                .unwrap_or(DEFAULT_API_BASE_URL)
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the API base URL.
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_has_base_url() {
        let config = FrontendConfig::new();
        assert!(!config.api_base_url().is_empty());
    }

    #[test]
    fn config_clone_preserves_url() {
        let config = FrontendConfig::new();
        let clone = config.clone();
        assert_eq!(config.api_base_url(), clone.api_base_url());
    }
}
