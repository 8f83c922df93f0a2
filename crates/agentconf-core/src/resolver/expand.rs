//! Expansion of `$NAME` and `${...}` environment references in fragment values.

use super::fragment::ConfigFragment;
use crate::environment::{Environment, ProcessEnvironment};
use crate::error::ExpandError;
use regex::{Captures, Regex};
use serde_yaml::Value;
use std::sync::LazyLock;

static REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\$|\$\{([^}]*)\}|\$\{|\$([A-Za-z_][A-Za-z0-9_]*)")
        .expect("reference pattern is valid")
});

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("name pattern is valid"));

/// Expand references in every string value of a fragment using the process
/// environment.
///
/// Supports `$NAME`, `${NAME}`, `${env:NAME}`, `${NAME:-default}` and `$$`
/// for a literal `$`. Keys are not expanded.
pub fn expand_fragment(fragment: ConfigFragment) -> Result<ConfigFragment, ExpandError> {
    expand_fragment_with(fragment, &ProcessEnvironment)
}

/// Same as [`expand_fragment`], reading variables from `env`.
pub fn expand_fragment_with(
    mut fragment: ConfigFragment,
    env: &dyn Environment,
) -> Result<ConfigFragment, ExpandError> {
    for (_, value) in fragment.root_mut().iter_mut() {
        expand_value(value, env)?;
    }
    Ok(fragment)
}

fn expand_value(value: &mut Value, env: &dyn Environment) -> Result<(), ExpandError> {
    match value {
        Value::String(text) => {
            if text.contains('$') {
                *text = expand_str(text, env)?;
            }
        }
        Value::Sequence(items) => {
            for item in items {
                expand_value(item, env)?;
            }
        }
        Value::Mapping(map) => {
            for (_, item) in map.iter_mut() {
                expand_value(item, env)?;
            }
        }
        Value::Tagged(tagged) => expand_value(&mut tagged.value, env)?,
        Value::Null | Value::Bool(_) | Value::Number(_) => {}
    }
    Ok(())
}

pub(super) fn expand_str(text: &str, env: &dyn Environment) -> Result<String, ExpandError> {
    let mut failure = None;
    let expanded = REFERENCE.replace_all(text, |caps: &Captures| {
        if failure.is_some() {
            return String::new();
        }
        let resolved = if &caps[0] == "$$" {
            Ok("$".to_string())
        } else if let Some(inner) = caps.get(1) {
            resolve_reference(inner.as_str(), env)
        } else if let Some(name) = caps.get(2) {
            resolve_reference(name.as_str(), env)
        } else {
            Err(ExpandError::Unterminated(text.to_string()))
        };
        resolved.unwrap_or_else(|err| {
            failure = Some(err);
            String::new()
        })
    });
    match failure {
        Some(err) => Err(err),
        None => Ok(expanded.into_owned()),
    }
}

fn resolve_reference(reference: &str, env: &dyn Environment) -> Result<String, ExpandError> {
    let reference = reference.strip_prefix("env:").unwrap_or(reference);
    let (name, default) = match reference.split_once(":-") {
        Some((name, default)) => (name, Some(default)),
        None => (reference, None),
    };
    if !NAME.is_match(name) {
        return Err(ExpandError::InvalidName(reference.to_string()));
    }
    match (env.var(name), default) {
        (Some(value), _) => Ok(value),
        (None, Some(default)) => Ok(default.to_string()),
        (None, None) => Err(ExpandError::Unset(name.to_string())),
    }
}
