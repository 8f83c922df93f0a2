//! Providers fetching configuration over HTTP and HTTPS.

use crate::{ProviderError, ProviderSettings};
use agentconf_core::{FetchError, SchemeProvider};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;

/// URL scheme a provider speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UrlScheme {
    Http,
    Https,
}

impl UrlScheme {
    fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Fetches `http://...` or `https://...` locations with a GET request.
///
/// The URL is rebuilt from the provider's own scheme, so the provider
/// registered for `https` never issues plain-text requests. No retries.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    scheme: UrlScheme,
    client: Client,
}

impl HttpProvider {
    /// Provider for plain `http` locations.
    pub fn http(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            scheme: UrlScheme::Http,
            client: settings.http_client()?,
        })
    }

    /// Provider for `https` locations.
    pub fn https(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            scheme: UrlScheme::Https,
            client: settings.http_client()?,
        })
    }

    /// Full URL for a locator of the form `//host/path`.
    fn url_for(&self, locator: &str) -> Result<String, FetchError> {
        if !locator.starts_with("//") || locator.len() == 2 {
            return Err(FetchError::InvalidLocator(format!(
                "expected {}://host/path, got {}:{locator}",
                self.scheme.as_str(),
                self.scheme.as_str()
            )));
        }
        Ok(format!("{}:{locator}", self.scheme.as_str()))
    }
}

#[async_trait]
impl SchemeProvider for HttpProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        let url = self.url_for(locator)?;
        debug!("fetching remote config (scheme={})", self.scheme.as_str());
        get_bytes(&self.client, &url).await
    }
}

/// GET a URL and return the body of a successful response.
pub(crate) async fn get_bytes(client: &Client, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = client.get(url).send().await.map_err(map_http_error)?;
    let status = response.status();
    if !status.is_success() {
        warn!("remote config request failed (status={})", status.as_u16());
        return Err(FetchError::Status {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let body = response.bytes().await.map_err(map_http_error)?;
    debug!("remote config received (bytes={})", body.len());
    Ok(body.to_vec())
}

pub(crate) fn map_http_error(error: reqwest::Error) -> FetchError {
    if error.is_timeout() {
        FetchError::Transport(format!("request timed out: {error}"))
    } else {
        FetchError::Transport(error.to_string())
    }
}
