//! Tuning for the built-in providers.

use std::time::Duration;

/// Default timeout for remote fetches.
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
/// Default user agent for remote fetches.
const DEFAULT_USER_AGENT: &str = concat!("agentconf/", env!("CARGO_PKG_VERSION"));

/// Settings shared by the network-backed providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Whole-request timeout for http, https and s3 fetches.
    pub http_timeout: Duration,
    /// User agent sent with remote fetches.
    pub user_agent: String,
    /// Base URL replacing the AWS virtual-hosted endpoint for s3 fetches.
    ///
    /// Objects are requested path-style as `{endpoint}/{bucket}/{key}`.
    pub s3_endpoint: Option<String>,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            s3_endpoint: None,
        }
    }
}

impl ProviderSettings {
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_s3_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.s3_endpoint = Some(endpoint.into());
        self
    }

    /// Build the reqwest client used by remote providers.
    pub(crate) fn http_client(&self) -> Result<reqwest::Client, crate::ProviderError> {
        if self.http_timeout.is_zero() {
            return Err(crate::ProviderError::InvalidSettings(
                "http timeout must be greater than zero".to_string(),
            ));
        }
        Ok(reqwest::Client::builder()
            .timeout(self.http_timeout)
            .user_agent(self.user_agent.as_str())
            .build()?)
    }
}
