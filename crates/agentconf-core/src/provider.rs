//! Scheme provider interface and registry.

use crate::error::FetchError;
use async_trait::async_trait;
use log::debug;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Fetcher for the locations of one scheme.
///
/// Timeouts and retries, if any, belong to the implementation.
#[async_trait]
pub trait SchemeProvider: Send + Sync {
    /// Retrieve raw content for the locator (the location minus `scheme:`).
    async fn fetch(&self, locator: &str) -> Result<Vec<u8>, FetchError>;
}

/// Mapping from scheme name to provider.
///
/// Populated explicitly at startup. Registering a scheme twice replaces the
/// earlier provider.
#[derive(Default, Clone)]
pub struct SchemeRegistry {
    providers: Arc<RwLock<HashMap<String, Arc<dyn SchemeProvider>>>>,
}

impl SchemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider for a scheme, replacing any previous one.
    pub fn register(&self, scheme: impl Into<String>, provider: Arc<dyn SchemeProvider>) {
        let scheme = scheme.into();
        debug!("registering scheme provider (scheme={scheme})");
        if self.providers.write().insert(scheme.clone(), provider).is_some() {
            debug!("replaced existing scheme provider (scheme={scheme})");
        }
    }

    /// Builder-style [`SchemeRegistry::register`].
    pub fn with(self, scheme: impl Into<String>, provider: Arc<dyn SchemeProvider>) -> Self {
        self.register(scheme, provider);
        self
    }

    /// Provider registered for a scheme, if any.
    pub fn resolve(&self, scheme: &str) -> Option<Arc<dyn SchemeProvider>> {
        self.providers.read().get(scheme).cloned()
    }

    pub fn contains(&self, scheme: &str) -> bool {
        self.providers.read().contains_key(scheme)
    }

    /// Registered scheme names, sorted.
    pub fn schemes(&self) -> Vec<String> {
        let mut schemes: Vec<String> = self.providers.read().keys().cloned().collect();
        schemes.sort();
        schemes
    }
}

impl std::fmt::Debug for SchemeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemeRegistry")
            .field("schemes", &self.schemes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Fixed(&'static str);

    #[async_trait]
    impl SchemeProvider for Fixed {
        async fn fetch(&self, _locator: &str) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    #[test]
    fn resolves_registered_schemes() {
        let registry = SchemeRegistry::new()
            .with("file", Arc::new(Fixed("a: 1")))
            .with("env", Arc::new(Fixed("b: 2")));
        assert_eq!(registry.schemes(), vec!["env", "file"]);
        assert!(registry.contains("file"));
        assert!(registry.resolve("s3").is_none());
    }

    #[tokio::test]
    async fn last_registration_wins() {
        let registry = SchemeRegistry::new();
        registry.register("file", Arc::new(Fixed("first")));
        registry.register("file", Arc::new(Fixed("second")));

        let provider = registry.resolve("file").expect("provider");
        let content = provider.fetch("ignored").await.expect("fetch");
        assert_eq!(content, b"second");
        assert_eq!(registry.schemes().len(), 1);
    }
}
