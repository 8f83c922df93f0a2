//! Provider fetching configuration objects from S3.

use crate::http::map_http_error;
use crate::{ProviderError, ProviderSettings};
use agentconf_core::{FetchError, SchemeProvider};
use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::sync::Arc;

/// Host suffix of AWS virtual-hosted S3 endpoints.
const AWS_HOST_SUFFIX: &str = ".amazonaws.com";
/// Marker between bucket and region in the host.
const S3_HOST_MARKER: &str = ".s3.";

/// Bucket, region and key parsed from an `s3://` locator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectLocation {
    pub bucket: String,
    pub region: String,
    pub key: String,
}

impl ObjectLocation {
    /// Parse `//<bucket>.s3.<region>.amazonaws.com/<key>`.
    pub fn parse(locator: &str) -> Result<Self, FetchError> {
        let invalid = || {
            FetchError::InvalidLocator(format!(
                "expected s3://<bucket>.s3.<region>.amazonaws.com/<key>, got s3:{locator}"
            ))
        };
        let rest = locator.strip_prefix("//").ok_or_else(invalid)?;
        let (host, key) = rest.split_once('/').ok_or_else(invalid)?;
        let (bucket, region_host) = host.split_once(S3_HOST_MARKER).ok_or_else(invalid)?;
        let region = region_host
            .strip_suffix(AWS_HOST_SUFFIX)
            .ok_or_else(invalid)?;
        if bucket.is_empty() || region.is_empty() || key.is_empty() || region.contains('.') {
            return Err(invalid());
        }
        Ok(Self {
            bucket: bucket.to_string(),
            region: region.to_string(),
            key: key.to_string(),
        })
    }
}

/// Transport that retrieves an object's bytes.
///
/// Implementations report a missing object as [`FetchError::NotFound`].
#[async_trait]
pub trait ObjectStoreClient: Send + Sync {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, FetchError>;
}

/// Anonymous HTTPS client for publicly readable objects.
#[derive(Debug, Clone)]
pub struct HttpObjectStoreClient {
    client: Client,
    endpoint: Option<String>,
}

impl HttpObjectStoreClient {
    pub fn new(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self {
            client: settings.http_client()?,
            endpoint: settings
                .s3_endpoint
                .as_ref()
                .map(|endpoint| endpoint.trim_end_matches('/').to_string()),
        })
    }

    fn object_url(&self, location: &ObjectLocation) -> String {
        match &self.endpoint {
            Some(endpoint) => format!("{endpoint}/{}/{}", location.bucket, location.key),
            None => format!(
                "https://{}{S3_HOST_MARKER}{}{AWS_HOST_SUFFIX}/{}",
                location.bucket, location.region, location.key
            ),
        }
    }
}

#[async_trait]
impl ObjectStoreClient for HttpObjectStoreClient {
    async fn get_object(&self, location: &ObjectLocation) -> Result<Vec<u8>, FetchError> {
        let url = self.object_url(location);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_http_error)?;
        let status = response.status();
        match status {
            status if status.is_success() => {}
            StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound(format!(
                    "s3 object {}/{}",
                    location.bucket, location.key
                )));
            }
            StatusCode::FORBIDDEN | StatusCode::UNAUTHORIZED => {
                warn!(
                    "s3 access denied (bucket={}, status={})",
                    location.bucket,
                    status.as_u16()
                );
                return Err(FetchError::AccessDenied(format!(
                    "s3 object {}/{}",
                    location.bucket, location.key
                )));
            }
            status => {
                return Err(FetchError::Status {
                    url,
                    status: status.as_u16(),
                });
            }
        }
        let body = response.bytes().await.map_err(map_http_error)?;
        Ok(body.to_vec())
    }
}

/// Fetches `s3://` locations through an [`ObjectStoreClient`].
#[derive(Clone)]
pub struct S3Provider {
    client: Arc<dyn ObjectStoreClient>,
}

impl S3Provider {
    pub fn new(client: Arc<dyn ObjectStoreClient>) -> Self {
        Self { client }
    }

    /// Provider backed by [`HttpObjectStoreClient`].
    pub fn from_settings(settings: &ProviderSettings) -> Result<Self, ProviderError> {
        Ok(Self::new(Arc::new(HttpObjectStoreClient::new(settings)?)))
    }
}

#[async_trait]
impl SchemeProvider for S3Provider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        let location = ObjectLocation::parse(locator)?;
        debug!(
            "fetching s3 object (bucket={}, region={}, key={})",
            location.bucket, location.region, location.key
        );
        self.client.get_object(&location).await
    }
}
