//! Public configuration for the Groq client.
//!
//! The configuration is immutable once the client is constructed; there is
//! no way to build a client without a credential.

use std::time::Duration;

/// Default chat-completions endpoint.
pub const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Configuration for [`GroqClient`](crate::GroqClient).
///
/// # Example
///
/// ```
/// use qrelay_groq::GroqConfig;
/// use std::time::Duration;
///
/// let config = GroqConfig::new("gsk_secret")
///     .with_connect_timeout(Duration::from_secs(5));
/// ```
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// Bearer credential sent with every request.
    pub(crate) api_key: String,
    /// Chat-completions endpoint URL.
    pub(crate) base_url: String,
    /// User agent string for HTTP requests.
    pub(crate) user_agent: String,
    /// Connection establishment timeout, both call paths.
    pub(crate) connect_timeout: Duration,
    /// Whole-request timeout, buffered path only. A streaming response has
    /// no a-priori duration bound.
    pub(crate) request_timeout: Duration,
}

impl GroqConfig {
    /// Create a configuration around the required API credential.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: GROQ_API_URL.to_string(),
            user_agent: concat!("qrelay/", env!("CARGO_PKG_VERSION")).to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Point the client at a different endpoint (tests, proxies).
    ///
    /// Defaults to [`GROQ_API_URL`].
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the user agent string for HTTP requests.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the connection establishment timeout.
    ///
    /// Defaults to 10 seconds.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Set the whole-request timeout for the buffered path.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_defaults_around_the_credential() {
        let config = GroqConfig::new("gsk_test");

        assert_eq!(config.api_key, "gsk_test");
        assert_eq!(
            config.base_url,
            "https://api.groq.com/openai/v1/chat/completions"
        );
        assert!(config.user_agent.contains("qrelay"));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn builder_pattern_overrides_each_field() {
        let config = GroqConfig::new("gsk_test")
            .with_base_url("http://127.0.0.1:9999/v1/chat/completions")
            .with_user_agent("test-agent")
            .with_connect_timeout(Duration::from_secs(2))
            .with_request_timeout(Duration::from_secs(5));

        assert_eq!(config.base_url, "http://127.0.0.1:9999/v1/chat/completions");
        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
