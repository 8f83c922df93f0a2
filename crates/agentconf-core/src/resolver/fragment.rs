//! Parsing fetched content into configuration fragments.

use super::merge::merge_values;
use crate::error::ParseError;
use crate::translate::PATH_SEPARATOR;
use serde_yaml::{Mapping, Value};
use std::collections::HashSet;

/// A parsed tree from one location or one translated override.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConfigFragment {
    origin: String,
    root: Mapping,
}

impl ConfigFragment {
    /// Location (or translated override) this fragment came from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn root(&self) -> &Mapping {
        &self.root
    }

    pub fn into_root(self) -> Mapping {
        self.root
    }

    pub(super) fn root_mut(&mut self) -> &mut Mapping {
        &mut self.root
    }
}

/// Parse YAML content into a fragment.
///
/// Empty and `null` documents yield an empty mapping. `<<` merge keys are
/// applied, then keys containing [`PATH_SEPARATOR`] are expanded into nested
/// mappings.
pub fn parse_fragment(origin: &str, content: &[u8]) -> Result<ConfigFragment, ParseError> {
    let text = std::str::from_utf8(content)?;
    let root = if text.trim().is_empty() {
        Mapping::new()
    } else {
        let mut value = serde_yaml::from_str::<Value>(text)?;
        value.apply_merge()?;
        match value {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => normalize_mapping(map)?,
            other => return Err(ParseError::NotAMapping(kind_name(&other))),
        }
    };
    Ok(ConfigFragment {
        origin: origin.to_string(),
        root,
    })
}

fn normalize_mapping(map: Mapping) -> Result<Mapping, ParseError> {
    let mut out = Mapping::new();
    let mut literal_keys = HashSet::new();
    for (key, value) in map {
        let key = key_to_string(key)?;
        let value = normalize_value(value)?;
        let is_path = key.contains(PATH_SEPARATOR);
        if !is_path && !literal_keys.insert(key.clone()) {
            return Err(ParseError::InvalidKey(format!(
                "duplicate key {key:?} after stringifying keys"
            )));
        }
        let (head, nested) = if is_path {
            let segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
            if segments.iter().any(|segment| segment.is_empty()) {
                return Err(ParseError::InvalidKey(format!("empty path segment in {key:?}")));
            }
            let nested = segments[1..].iter().rev().fold(value, |acc, segment| {
                let mut wrapper = Mapping::new();
                wrapper.insert(Value::String((*segment).to_string()), acc);
                Value::Mapping(wrapper)
            });
            (segments[0].to_string(), nested)
        } else {
            (key, value)
        };
        let head = Value::String(head);
        match out.get_mut(&head) {
            Some(existing) => merge_values(existing, nested),
            None => {
                out.insert(head, nested);
            }
        }
    }
    Ok(out)
}

fn normalize_value(value: Value) -> Result<Value, ParseError> {
    match value {
        Value::Mapping(map) => Ok(Value::Mapping(normalize_mapping(map)?)),
        Value::Sequence(items) => Ok(Value::Sequence(
            items
                .into_iter()
                .map(normalize_value)
                .collect::<Result<_, _>>()?,
        )),
        other => Ok(other),
    }
}

fn key_to_string(key: Value) -> Result<String, ParseError> {
    match key {
        Value::String(key) => Ok(key),
        Value::Bool(flag) => Ok(flag.to_string()),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(ParseError::InvalidKey(format!(
            "{} cannot be used as a mapping key",
            kind_name(&other)
        ))),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
