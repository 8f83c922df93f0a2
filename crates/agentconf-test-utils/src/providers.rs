//! Stub scheme providers with canned content or failures.

use agentconf_core::{FetchError, SchemeProvider};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

/// Serves fixed documents by locator and records every fetch.
#[derive(Default)]
pub struct StaticProvider {
    documents: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(mut self, locator: &str, content: &str) -> Self {
        self.documents
            .insert(locator.to_string(), content.to_string());
        self
    }

    /// Locators fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl SchemeProvider for StaticProvider {
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError> {
        self.calls.lock().push(locator.to_string());
        self.documents
            .get(locator)
            .map(|content| content.as_bytes().to_vec())
            .ok_or_else(|| FetchError::NotFound(locator.to_string()))
    }
}

/// Fails every fetch with a transport error.
#[derive(Clone)]
pub struct FailingProvider {
    message: String,
}

impl FailingProvider {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl SchemeProvider for FailingProvider {
    async fn fetch(&self, _locator: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Transport(self.message.clone()))
    }
}
