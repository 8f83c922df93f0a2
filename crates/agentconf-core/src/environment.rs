//! Environment variable sources.
//!
//! Expansion and the `env` provider read variables through [`Environment`]
//! so callers and tests can supply a fixed set instead of the process
//! environment.

use std::collections::HashMap;
use std::fmt::Debug;

/// Read-only view of environment variables.
pub trait Environment: Debug + Send + Sync {
    /// Value of `name` as UTF-8, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Raw value of `name`, if set.
    fn var_bytes(&self, name: &str) -> Option<Vec<u8>> {
        self.var(name).map(String::into_bytes)
    }
}

/// The environment of the running process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn var_bytes(&self, name: &str) -> Option<Vec<u8>> {
        std::env::var_os(name).map(|value| value.into_encoded_bytes())
    }
}

impl Environment for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}
