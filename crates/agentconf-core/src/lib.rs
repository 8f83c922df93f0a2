//! Configuration resolution for the agent.
//!
//! This crate turns an ordered list of configuration locations plus a list of
//! `path=value` overrides into one merged configuration tree. Fetching is
//! delegated to scheme providers registered in a [`SchemeRegistry`].

mod environment;
mod error;
mod location;
mod overrides;
mod provider;
mod resolver;
mod translate;

/// Error types surfaced by collection, fetching, parsing and resolution.
pub use error::{ExpandError, FetchError, MalformedOverride, ParseError, ResolutionError};
/// Environment variable sources for expansion and the `env` scheme.
pub use environment::{Environment, ProcessEnvironment};
/// Location registry and scheme splitting.
pub use location::{ConfigLocations, split_scheme};
/// Override collection.
pub use overrides::{Override, OverrideCollector};
/// Scheme provider interface and registry.
pub use provider::{SchemeProvider, SchemeRegistry};
/// Resolver, parsed fragments and the merged tree.
pub use resolver::{
    ConfigFragment, MergedConfig, Resolver, expand_fragment, expand_fragment_with, parse_fragment,
};
/// Override translation into inline-literal fragments.
pub use translate::{INLINE_SCHEME, PATH_SEPARATOR, TranslatedOverride, translate};
