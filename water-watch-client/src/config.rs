//! Client configuration

/// Default base URL of the hosted Water Watch service
pub const DEFAULT_BASE_URL: &str = "https://water-watch-si4e.vercel.app";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for [`crate::WaterWatchApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the API, without a trailing slash
    pub base_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the hosted service
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the base URL; trailing slashes are stripped
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        self.base_url = url;
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_hosted_service() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new().with_base_url("http://localhost:3000/");
        assert_eq!(config.base_url, "http://localhost:3000");

        let config = ClientConfig::new().with_base_url("http://localhost:3000///");
        assert_eq!(config.base_url, "http://localhost:3000");
    }
}
