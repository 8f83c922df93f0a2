//! Error types for configuration resolution.

use thiserror::Error;

/// An override assignment that cannot be collected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedOverride {
    /// No `=` between path and value.
    #[error("missing equal sign")]
    MissingSeparator { raw: String },
    /// Nothing before the `=`.
    #[error("empty key")]
    EmptyKey { raw: String },
    /// The dotted path has an empty segment (`a..b`, `.a`, `a.`).
    #[error("empty path segment in key {key:?}")]
    EmptySegment { raw: String, key: String },
}

impl MalformedOverride {
    /// The offending assignment exactly as supplied.
    pub fn raw(&self) -> &str {
        match self {
            Self::MissingSeparator { raw }
            | Self::EmptyKey { raw }
            | Self::EmptySegment { raw, .. } => raw,
        }
    }
}

/// Errors returned by scheme providers.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The file, variable or object does not exist.
    #[error("not found: {0}")]
    NotFound(String),
    /// Local IO failure other than a missing file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Remote endpoint answered with a non-success status.
    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },
    /// Remote endpoint refused access.
    #[error("access denied: {0}")]
    AccessDenied(String),
    /// Network or transport failure.
    #[error("transport error: {0}")]
    Transport(String),
    /// The locator is not understood by the provider.
    #[error("invalid locator: {0}")]
    InvalidLocator(String),
}

/// Errors returned while parsing fetched content into a fragment.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Content is not UTF-8.
    #[error("content is not valid utf-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),
    /// Content is not valid YAML.
    #[error("invalid yaml: {0}")]
    Syntax(#[from] serde_yaml::Error),
    /// The document root is not a mapping.
    #[error("expected a mapping at the document root, found {0}")]
    NotAMapping(&'static str),
    /// A mapping key cannot be used as a path segment.
    #[error("invalid key: {0}")]
    InvalidKey(String),
}

/// Errors returned while expanding `${...}` references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpandError {
    /// Referenced variable is not set and no default was given.
    #[error("environment variable {0} is not set")]
    Unset(String),
    /// Reference does not name a valid variable.
    #[error("invalid variable reference ${{{0}}}")]
    InvalidName(String),
    /// `${` without a closing brace.
    #[error("unterminated variable reference in {0:?}")]
    Unterminated(String),
}

/// Error surfaced by [`crate::Resolver`], naming the location that caused it.
///
/// Overrides are reported by their translated `inline-literal:` location.
#[derive(Debug, Error)]
pub enum ResolutionError {
    /// No provider is registered for the location's scheme.
    #[error("unknown scheme {scheme:?} in location {location}")]
    UnknownScheme { location: String, scheme: String },
    /// The provider failed to retrieve content.
    #[error("failed to fetch {location}: {source}")]
    Fetch {
        location: String,
        #[source]
        source: FetchError,
    },
    /// Retrieved content is not valid structural syntax.
    #[error("failed to parse {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: ParseError,
    },
    /// A variable reference could not be expanded.
    #[error("failed to expand {location}: {source}")]
    Expand {
        location: String,
        #[source]
        source: ExpandError,
    },
}

impl ResolutionError {
    /// The location (or translated override) that caused the failure.
    pub fn location(&self) -> &str {
        match self {
            Self::UnknownScheme { location, .. }
            | Self::Fetch { location, .. }
            | Self::Parse { location, .. }
            | Self::Expand { location, .. } => location,
        }
    }
}
