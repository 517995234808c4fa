//! Leaf component rendering: defaults merging and template invocation.

use super::error::{RenderError, compute_suggestions};
use super::interpolate::{interpolate_at, resolve_thunks_at};
use super::registry::{Defaults, TemplateRegistry};
use super::render::render_at;
use crate::types::{Map, Path, RENDER_KEY, Value};

/// Render the mapping node at `path` if it is a component descriptor.
///
/// Any other node passes through unchanged, so a tree with no `__render`
/// anywhere renders to itself. For a descriptor, defaults for its identifier
/// are merged beneath its own data, placeholders in the merged data resolve
/// against the node's ancestors, and the registered template function turns
/// the node into its rendered string.
pub(crate) fn render_component(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    path: &Path,
    depth: usize,
) -> Result<Value, RenderError> {
    let node = root.at_path(path).cloned().unwrap_or_default();
    let own = match node {
        Value::Object(map) => map,
        other => return Ok(other),
    };
    let Some(id) = own.get(RENDER_KEY).and_then(Value::as_str).map(String::from) else {
        return Ok(Value::Object(own));
    };

    if let Some(default_data) = defaults.get(&id) {
        let merged = merge_defaults(&own, default_data);
        root.replace_at(path, |_| Value::Object(merged.clone()));

        // Defaults may introduce container fields of their own, including
        // nested component descriptors; give them the same child pass the
        // node's original containers already had.
        let container_keys: Vec<String> = merged
            .iter()
            .filter(|(_, value)| matches!(value, Value::Object(_) | Value::Array(_)))
            .map(|(key, _)| key.clone())
            .collect();
        for key in container_keys {
            render_at(root, templates, defaults, &path.child_key(key), depth)?;
        }
    }

    // Resolve placeholders in the merged data against the enclosing context,
    // then force the thunks so the template function sees plain strings.
    interpolate_at(root, templates, defaults, path, depth)?;
    resolve_thunks_at(root, templates, defaults, path, depth)?;

    let data = root.at_path(path).cloned().unwrap_or_default();
    let Some(template) = templates.get(&id) else {
        let available = templates.available();
        let suggestions = compute_suggestions(&id, &available);
        return Err(RenderError::TemplateNotFound {
            id,
            suggestions,
            available,
        });
    };
    Ok(Value::String(template(&data)))
}

/// Merge a node's own data over a default mapping.
///
/// Scalar conflicts are node-own-wins. Array fields present in both are
/// concatenated, defaults first and the node's own values appended, so
/// defaults never silently drop array entries. Keys present only in the
/// defaults are kept as-is.
pub(crate) fn merge_defaults(own: &Map, default_data: &Value) -> Map {
    let Some(base) = default_data.as_object() else {
        return own.clone();
    };

    let mut merged = base.clone();
    for (key, value) in own {
        let merged_value = match (merged.get(key), value) {
            (Some(Value::Array(base_items)), Value::Array(own_items)) => {
                Value::Array(base_items.iter().chain(own_items).cloned().collect())
            }
            _ => value.clone(),
        };
        merged.insert(key.clone(), merged_value);
    }
    merged
}
