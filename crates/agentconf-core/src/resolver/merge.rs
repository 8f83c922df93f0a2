//! Merge helpers for configuration fragments.

use serde_yaml::{Mapping, Value};

/// Merge overlay values into the base, recursively merging mappings.
///
/// Mappings merge key by key, recursing on conflicts. Any other pairing
/// (scalars, sequences, mismatched kinds) replaces the base wholesale.
pub(super) fn merge_values(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
            merge_mappings(base_map, overlay_map);
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value;
        }
    }
}

/// Merge an overlay mapping into a base mapping.
pub(super) fn merge_mappings(base: &mut Mapping, overlay: Mapping) {
    for (key, value) in overlay {
        match base.get_mut(&key) {
            Some(existing) => merge_values(existing, value),
            None => {
                base.insert(key, value);
            }
        }
    }
}
