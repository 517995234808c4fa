//! Variable interpolation over a data tree.
//!
//! Walks the subtree at a context path, scanning string leaves for `%{name}`
//! placeholders. A string whose entire remainder is one trailing placeholder
//! becomes a memoizing [`Thunk`]; any other placeholder-bearing string is
//! resolved eagerly into a plain string. Resolution looks the variable up on
//! the nearest enclosing mapping along the context path, and may call back
//! into the renderer when the resolved field is a nested component — the
//! mutual recursion at the heart of the engine.

use super::MAX_DEPTH;
use super::error::RenderError;
use super::registry::{Defaults, TemplateRegistry};
use super::render::render_at;
use crate::parser::{Segment, parse_template};
use crate::types::{Map, Path, Thunk, Value};

/// Interpolate the subtree of `root` at `context`, in place.
///
/// String leaves are replaced by resolved strings or thunks (written back
/// into `root`), and the transformed subtree is returned. A context path
/// that denotes no node is logged and falls back to an empty mapping, so
/// interpolation proceeds best-effort.
///
/// # Errors
///
/// Returns an error if resolution renders a component whose template is
/// missing, or if mutually referential interpolations exceed the depth
/// limit.
pub fn interpolate(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    context: &Path,
) -> Result<Value, RenderError> {
    interpolate_at(root, templates, defaults, context, 0)
}

/// Force a thunk against `root`, resolving its variable by nearest-ancestor
/// lookup from the thunk's stored context path.
///
/// The first force computes and caches; later forces (of this thunk or any
/// clone sharing its cell) return the cached text without recomputation.
pub fn force(
    thunk: &Thunk,
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
) -> Result<String, RenderError> {
    force_at(thunk, root, templates, defaults, 0)
}

/// Force every thunk in the subtree of `root` at `context`, replacing each
/// with its resolved string.
pub fn resolve_thunks(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    context: &Path,
) -> Result<(), RenderError> {
    resolve_thunks_at(root, templates, defaults, context, 0)
}

pub(crate) fn interpolate_at(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    path: &Path,
    depth: usize,
) -> Result<Value, RenderError> {
    let Some(node) = root.at_path(path).cloned() else {
        log::warn!("context path {path} not found; interpolating an empty mapping");
        return Ok(Value::Object(Map::new()));
    };

    let result = match node {
        Value::Array(items) => {
            for index in 0..items.len() {
                interpolate_at(root, templates, defaults, &path.child_index(index), depth)?;
            }
            root.at_path(path).cloned().unwrap_or_default()
        }
        Value::Object(map) => {
            for key in map.keys() {
                interpolate_at(root, templates, defaults, &path.child_key(key.as_str()), depth)?;
            }
            root.at_path(path).cloned().unwrap_or_default()
        }
        Value::String(s) => interpolate_string(&s, root, templates, defaults, path, depth)?,
        // A deferred value already in the tree: invoke it and keep its result.
        Value::Thunk(thunk) => {
            Value::String(force_at(&thunk, root, templates, defaults, depth)?)
        }
        other => other,
    };

    root.replace_at(path, |_| result.clone());
    Ok(result)
}

/// Interpolate one string leaf.
fn interpolate_string(
    input: &str,
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    path: &Path,
    depth: usize,
) -> Result<Value, RenderError> {
    let template = parse_template(input);

    if !template.has_placeholder() {
        return Ok(Value::String(input.to_string()));
    }

    // The entire remainder is one trailing placeholder: defer it.
    if let Some((prefix, name)) = template.trailing_placeholder() {
        return Ok(Value::Thunk(Thunk::new(prefix, name, path.clone())));
    }

    // Text follows a placeholder: resolve every placeholder now, left to
    // right, into a single string. No thunk survives a multi-segment tail.
    let mut output = String::new();
    for segment in &template.segments {
        match segment {
            Segment::Literal(text) => output.push_str(text),
            Segment::Placeholder(name) => {
                output.push_str(&resolve_variable(
                    name, root, templates, defaults, path, depth,
                )?);
            }
        }
    }
    Ok(Value::String(output))
}

/// Resolve a variable name by nearest-ancestor lookup.
///
/// Walks from the placeholder's enclosing node upward toward the root; the
/// first mapping with an own field `name` wins, the root is checked last,
/// and no ancestor is checked twice. A string field is returned verbatim, a
/// thunk field is forced, and any other field is handed to the renderer at
/// the ancestor's `name` path and stringified (sequences join with the empty
/// separator). No match resolves to the empty string.
pub(crate) fn resolve_variable(
    name: &str,
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    context: &Path,
    depth: usize,
) -> Result<String, RenderError> {
    if depth >= MAX_DEPTH {
        return Err(RenderError::MaxDepthExceeded {
            context: context.to_string(),
        });
    }

    for ancestor in context.self_and_ancestors() {
        let Some(field) = root
            .at_path(&ancestor)
            .and_then(|node| node.get(name))
            .cloned()
        else {
            continue;
        };

        return match field {
            Value::String(s) => Ok(s),
            Value::Thunk(thunk) => force_at(&thunk, root, templates, defaults, depth + 1),
            _ => {
                let rendered = render_at(
                    root,
                    templates,
                    defaults,
                    &ancestor.child_key(name),
                    depth + 1,
                )?;
                Ok(rendered.to_string())
            }
        };
    }

    log::debug!("no ancestor of {context} defines '{name}'; substituting the empty string");
    Ok(String::new())
}

pub(crate) fn force_at(
    thunk: &Thunk,
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    depth: usize,
) -> Result<String, RenderError> {
    thunk.force_with(|| {
        resolve_variable(thunk.name(), root, templates, defaults, thunk.context(), depth)
    })
}

pub(crate) fn resolve_thunks_at(
    root: &mut Value,
    templates: &TemplateRegistry,
    defaults: &Defaults,
    path: &Path,
    depth: usize,
) -> Result<(), RenderError> {
    let Some(node) = root.at_path(path).cloned() else {
        return Ok(());
    };

    match node {
        Value::Array(items) => {
            for index in 0..items.len() {
                resolve_thunks_at(root, templates, defaults, &path.child_index(index), depth)?;
            }
        }
        Value::Object(map) => {
            for key in map.keys() {
                resolve_thunks_at(root, templates, defaults, &path.child_key(key.as_str()), depth)?;
            }
        }
        Value::Thunk(thunk) => {
            let text = force_at(&thunk, root, templates, defaults, depth)?;
            root.replace_at(path, |_| Value::String(text));
        }
        _ => {}
    }

    Ok(())
}
