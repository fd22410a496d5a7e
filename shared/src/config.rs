pub const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("API base URL must start with http:// or https://, got {0:?}")]
    InvalidScheme(String),
}

/// Where the prediction service lives. Read once at startup and shared
/// read-only by every request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidScheme(base_url.to_string()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
        })
    }

    /// Resolves the configured value, falling back to [`DEFAULT_API_URL`]
    /// when it is unset, blank or unusable.
    pub fn resolve(configured: Option<&str>) -> Self {
        match configured.map(str::trim).filter(|value| !value.is_empty()) {
            None => Self::default(),
            Some(value) => Self::new(value).unwrap_or_else(|err| {
                log::warn!("{}; using {}", err, DEFAULT_API_URL);
                Self::default()
            }),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_or_blank_uses_default() {
        assert_eq!(ApiConfig::resolve(None).base_url(), "http://localhost:5000");
        assert_eq!(ApiConfig::resolve(Some("  ")).base_url(), "http://localhost:5000");
    }

    #[test]
    fn trailing_slashes_are_dropped() {
        let config = ApiConfig::resolve(Some("https://tamatar.example.com/api/ "));
        assert_eq!(config.predict_url(), "https://tamatar.example.com/api/predict");
        assert_eq!(config.health_url(), "https://tamatar.example.com/api/health");
    }

    #[test]
    fn missing_scheme_is_rejected() {
        assert_eq!(
            ApiConfig::new("localhost:5000"),
            Err(ConfigError::InvalidScheme("localhost:5000".into()))
        );
        assert_eq!(ApiConfig::resolve(Some("localhost:5000")), ApiConfig::default());
    }
}
