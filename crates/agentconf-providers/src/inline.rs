//! Provider treating the locator itself as content.

use agentconf_core::{FetchError, SchemeProvider};
use async_trait::async_trait;

/// Returns the locator verbatim; backs the `yaml` and `inline-literal` schemes.
#[derive(Debug, Default)]
pub struct InlineProvider;

impl InlineProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SchemeProvider for InlineProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        Ok(locator.as_bytes().to_vec())
    }
}
