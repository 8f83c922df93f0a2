//! Public surface for agentconf.
//!
//! Re-exports the resolution core and the built-in providers, and provides
//! the operator flag surface plus a logging helper so binaries wire things
//! up consistently.

mod flags;

/// Re-export for convenience.
pub use agentconf_core as core;
/// Re-export for convenience.
pub use agentconf_providers as providers;

pub use agentconf_core::{
    ConfigLocations, MergedConfig, OverrideCollector, ResolutionError, Resolver, SchemeRegistry,
};
pub use agentconf_providers::{ProviderSettings, default_registry, default_resolver};
/// Operator flags for locations, overrides and feature gates.
pub use flags::{CONFIG_FLAG, ConfigFlags, FEATURE_GATES_FLAG, SET_FLAG};

#[inline]
/// Initialize logging using env_logger; `RUST_LOG` controls verbosity.
///
/// Safe to call more than once. Binaries are expected to call this early in
/// startup to ensure log output is wired up.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
