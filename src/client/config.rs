//! Client configuration options.

use std::time::Duration;

/// Configuration for the Teamwork client.
///
/// # Example
///
/// ```
/// use teamwork_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Per-request timeout. The upstream API budget is 20 seconds.
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            user_agent: format!("teamwork-api/{} (Rust)", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(20));
        assert!(config.user_agent.starts_with("teamwork-api/"));
    }

    #[test]
    fn test_builder_setters() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("test/0.1");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "test/0.1");
    }
}
