//! Built-in scheme providers for configuration resolution.

pub mod env;
pub mod error;
pub mod file;
pub mod http;
pub mod inline;
pub mod s3;
pub mod settings;

/// Provider construction errors.
pub use error::ProviderError;
/// Provider implementations.
pub use env::EnvProvider;
pub use file::FileProvider;
pub use http::HttpProvider;
pub use inline::InlineProvider;
pub use s3::{HttpObjectStoreClient, ObjectLocation, ObjectStoreClient, S3Provider};
/// Provider tuning.
pub use settings::ProviderSettings;

use agentconf_core::{INLINE_SCHEME, Resolver, SchemeRegistry};
use log::info;
use std::sync::Arc;

/// Scheme names registered by [`default_registry`].
pub const FILE_SCHEME: &str = "file";
pub const ENV_SCHEME: &str = "env";
pub const YAML_SCHEME: &str = "yaml";
pub const HTTP_SCHEME: &str = "http";
pub const HTTPS_SCHEME: &str = "https";
pub const S3_SCHEME: &str = "s3";

/// Registry with every built-in scheme.
///
/// `yaml` and `inline-literal` share one inline provider.
pub fn default_registry(settings: &ProviderSettings) -> Result<SchemeRegistry, ProviderError> {
    let inline = Arc::new(InlineProvider::new());
    let registry = SchemeRegistry::new()
        .with(FILE_SCHEME, Arc::new(FileProvider::new()))
        .with(ENV_SCHEME, Arc::new(EnvProvider::new()))
        .with(YAML_SCHEME, inline.clone())
        .with(INLINE_SCHEME, inline)
        .with(HTTP_SCHEME, Arc::new(HttpProvider::http(settings)?))
        .with(HTTPS_SCHEME, Arc::new(HttpProvider::https(settings)?))
        .with(S3_SCHEME, Arc::new(S3Provider::from_settings(settings)?));
    info!(
        "default scheme registry ready (schemes={})",
        registry.schemes().join(",")
    );
    Ok(registry)
}

/// Resolver over [`default_registry`].
pub fn default_resolver(settings: &ProviderSettings) -> Result<Resolver, ProviderError> {
    Ok(Resolver::new(default_registry(settings)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registers_all_builtin_schemes() {
        let registry = default_registry(&ProviderSettings::default()).expect("registry");
        assert_eq!(
            registry.schemes(),
            vec!["env", "file", "http", "https", "inline-literal", "s3", "yaml"]
        );
    }
}
