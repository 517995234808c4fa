//! Depth-first component tree rendering.
//!
//! Walks a data tree from a context path, rewriting it in place: container
//! children are rendered recursively and written back through the root so
//! that later ancestor lookups observe the rendered subtree, descriptor
//! arrays collapse into space-joined strings, and mapping nodes are handed
//! to the leaf component stage for defaults merging and template invocation.

use super::component::render_component;
use super::error::RenderError;
use super::registry::{Defaults, TemplateRegistry};
use crate::types::{Path, Value};

/// Render the subtree of `root` at `context`, in place.
///
/// Returns the rendered value: a string once a component (or an array
/// containing components) has been rendered, an array of element-wise
/// rendered values at non-terminal levels, or the node unchanged when there
/// is nothing to render. The result is also written back into `root` at
/// `context`; the root path makes the result the new root.
///
/// # Errors
///
/// Returns [`RenderError::TemplateNotFound`] for a descriptor whose
/// identifier has no registered template, and
/// [`RenderError::MaxDepthExceeded`] when interpolation recurses without
/// bound.
pub fn render(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    context: &Path,
) -> Result<Value, RenderError> {
    render_at(root, templates, defaults, context, 0)
}

pub(crate) fn render_at(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    path: &Path,
    depth: usize,
) -> Result<Value, RenderError> {
    let Some(node) = root.at_path(path).cloned() else {
        log::warn!("context path {path} not found; nothing to render");
        return Ok(Value::Null);
    };

    let result = match node {
        Value::Array(items) => {
            // The join decision looks at the elements before they render.
            let has_components = items.iter().any(Value::is_descriptor);

            for index in 0..items.len() {
                render_at(root, templates, defaults, &path.child_index(index), depth)?;
            }

            let rendered = root.at_path(path).cloned().unwrap_or_default();
            if has_components {
                // An array holding components becomes one string.
                match rendered {
                    Value::Array(rendered_items) => Value::String(
                        rendered_items
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(" "),
                    ),
                    other => other,
                }
            } else {
                rendered
            }
        }
        Value::Object(map) => {
            // Render container fields in place; scalar, string and thunk
            // fields belong to the interpolator, not this pass.
            for (key, value) in &map {
                if matches!(value, Value::Object(_) | Value::Array(_)) {
                    render_at(root, templates, defaults, &path.child_key(key.as_str()), depth)?;
                }
            }
            render_component(root, templates, defaults, path, depth)?
        }
        other => other,
    };

    root.replace_at(path, |_| result.clone());
    Ok(result)
}
