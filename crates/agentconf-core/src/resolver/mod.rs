//! Resolution of locations and overrides into one merged tree.
//!
//! Every location is fetched through its scheme provider, parsed, expanded
//! and merged in registry order. Overrides are translated into inline
//! fragments and merged last, so they outrank every location.

mod expand;
mod fragment;
mod merge;


pub use expand::{expand_fragment, expand_fragment_with};
pub use fragment::{ConfigFragment, parse_fragment};

use crate::environment::{Environment, ProcessEnvironment};
use crate::error::ResolutionError;
use crate::location::{ConfigLocations, split_scheme};
use crate::overrides::OverrideCollector;
use crate::provider::SchemeRegistry;
use crate::translate::translate;
use futures_util::future::join_all;
use log::{debug, info};
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::sync::Arc;

/// The final configuration handed to the runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MergedConfig {
    root: Mapping,
}

impl MergedConfig {
    /// Look up a value by path segments.
    pub fn get<S: AsRef<str>>(&self, path: &[S]) -> Option<&Value> {
        let (first, rest) = path.split_first()?;
        let mut current = self.root.get(first.as_ref())?;
        for segment in rest {
            current = current.as_mapping()?.get(segment.as_ref())?;
        }
        Some(current)
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.root
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn into_value(self) -> Value {
        Value::Mapping(self.root)
    }

    /// Render the tree as YAML.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(&self.root)
    }

    /// Decode the tree into a typed configuration.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(Value::Mapping(self.root.clone()))
    }
}

/// Resolves configuration through a [`SchemeRegistry`].
///
/// Holds no state besides the registry and the environment used for
/// expansion: each call re-fetches every location.
#[derive(Debug, Clone)]
pub struct Resolver {
    registry: SchemeRegistry,
    env: Arc<dyn Environment>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(SchemeRegistry::default())
    }
}

impl Resolver {
    /// Create a resolver over a fully populated registry, expanding
    /// references from the process environment.
    pub fn new(registry: SchemeRegistry) -> Self {
        Self {
            registry,
            env: Arc::new(ProcessEnvironment),
        }
    }

    /// Expand references from `env` instead of the process environment.
    pub fn with_environment(mut self, env: Arc<dyn Environment>) -> Self {
        self.env = env;
        self
    }

    pub fn registry(&self) -> &SchemeRegistry {
        &self.registry
    }

    /// Resolve locations and overrides into a merged tree.
    ///
    /// Precedence (low -> high): locations in registry order, then overrides
    /// in collection order. Any failure aborts the whole pass.
    pub async fn resolve(
        &self,
        locations: &ConfigLocations,
        overrides: &OverrideCollector,
    ) -> Result<MergedConfig, ResolutionError> {
        info!(
            "resolving config (locations={}, overrides={})",
            locations.len(),
            overrides.len()
        );
        let mut fragments = self.load_all(locations.all()).await?;
        for entry in overrides.all() {
            let translated = translate(entry);
            let location = translated.location();
            debug!(
                "applying override (position={}, path={})",
                translated.position(),
                translated.path()
            );
            fragments.push(self.load_content(&location, translated.content().as_bytes())?);
        }
        Ok(merge_fragments(fragments))
    }

    /// Resolve a flat location sequence purely in sequence order.
    ///
    /// Accepts the output of the flag surface, where translated overrides
    /// already follow the locations.
    pub async fn resolve_uris<S: AsRef<str>>(
        &self,
        uris: &[S],
    ) -> Result<MergedConfig, ResolutionError> {
        info!("resolving config (uris={})", uris.len());
        let fragments = self.load_all(uris).await?;
        Ok(merge_fragments(fragments))
    }

    /// Fetch all locations concurrently, then report results in order.
    async fn load_all<S: AsRef<str>>(
        &self,
        locations: &[S],
    ) -> Result<Vec<ConfigFragment>, ResolutionError> {
        let pending = locations
            .iter()
            .enumerate()
            .map(|(index, location)| self.load_location(index, location.as_ref()));
        join_all(pending).await.into_iter().collect()
    }

    async fn load_location(
        &self,
        index: usize,
        location: &str,
    ) -> Result<ConfigFragment, ResolutionError> {
        let Some((scheme, locator)) = split_scheme(location) else {
            return Err(ResolutionError::UnknownScheme {
                location: location.to_string(),
                scheme: location
                    .split_once(':')
                    .map(|(scheme, _)| scheme.to_string())
                    .unwrap_or_default(),
            });
        };
        let provider =
            self.registry
                .resolve(scheme)
                .ok_or_else(|| ResolutionError::UnknownScheme {
                    location: location.to_string(),
                    scheme: scheme.to_string(),
                })?;
        debug!("fetching location (scheme={scheme}, index={index})");
        let content =
            provider
                .fetch(locator)
                .await
                .map_err(|source| ResolutionError::Fetch {
                    location: location.to_string(),
                    source,
                })?;
        debug!(
            "fetched location (scheme={scheme}, index={index}, bytes={})",
            content.len()
        );
        self.load_content(location, &content)
    }

    /// Parse and expand one piece of content.
    fn load_content(
        &self,
        location: &str,
        content: &[u8],
    ) -> Result<ConfigFragment, ResolutionError> {
        let fragment =
            parse_fragment(location, content).map_err(|source| ResolutionError::Parse {
                location: location.to_string(),
                source,
            })?;
        expand_fragment_with(fragment, self.env.as_ref()).map_err(|source| {
            ResolutionError::Expand {
                location: location.to_string(),
                source,
            }
        })
    }
}

fn merge_fragments(fragments: Vec<ConfigFragment>) -> MergedConfig {
    let count = fragments.len();
    let mut root = Mapping::new();
    for fragment in fragments {
        merge::merge_mappings(&mut root, fragment.into_root());
    }
    info!("config resolved (fragments={count}, top_level_keys={})", root.len());
    MergedConfig { root }
}
