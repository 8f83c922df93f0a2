//! Provider reading local files.

use agentconf_core::{FetchError, SchemeProvider};
use async_trait::async_trait;
use log::debug;
use std::io::ErrorKind;

/// Reads `file:<path>` locations from the local filesystem.
///
/// Relative paths resolve against the process working directory.
#[derive(Debug, Default)]
pub struct FileProvider;

impl FileProvider {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SchemeProvider for FileProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        if locator.is_empty() {
            return Err(FetchError::InvalidLocator("empty file path".to_string()));
        }
        debug!("reading config file (path={locator})");
        match tokio::fs::read(locator).await {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(FetchError::NotFound(format!("file {locator}")))
            }
            Err(err) => Err(FetchError::Io(err)),
        }
    }
}
