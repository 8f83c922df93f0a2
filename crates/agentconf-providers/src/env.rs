//! Provider reading environment variables.

use agentconf_core::{Environment, FetchError, ProcessEnvironment, SchemeProvider};
use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

/// Returns the value of the variable named by `env:<NAME>` as content.
#[derive(Debug, Clone)]
pub struct EnvProvider {
    env: Arc<dyn Environment>,
}

impl Default for EnvProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvProvider {
    /// Read from the process environment.
    pub fn new() -> Self {
        Self::with_environment(Arc::new(ProcessEnvironment))
    }

    pub fn with_environment(env: Arc<dyn Environment>) -> Self {
        Self { env }
    }
}

#[async_trait]
impl SchemeProvider for EnvProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        if locator.is_empty() || locator.contains('=') || locator.contains('\0') {
            return Err(FetchError::InvalidLocator(format!(
                "invalid environment variable name {locator:?}"
            )));
        }
        let value = self
            .env
            .var_bytes(locator)
            .ok_or_else(|| FetchError::NotFound(format!("environment variable {locator}")))?;
        debug!("read config from environment (name={locator}, bytes={})", value.len());
        Ok(value)
    }
}
