//! Error types for provider construction.

/// Errors returned while building providers.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
    /// Invalid provider settings.
    #[error("invalid provider settings: {0}")]
    InvalidSettings(String),
}
