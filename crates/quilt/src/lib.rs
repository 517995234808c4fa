//! Data-driven composition of HTML fragments from nested component
//! descriptors.
//!
//! A tree of JSON-like [`Value`] nodes describes a document: mapping nodes
//! carrying the reserved `__render` key are component descriptors, rendered
//! by template functions looked up in a [`TemplateRegistry`] after their
//! data is merged with per-identifier [`Defaults`]. String leaves may hold
//! `%{name}` placeholders, resolved against the nearest enclosing mapping
//! that defines `name` — lazily (as memoizing [`Thunk`]s) when the
//! placeholder ends the string, eagerly otherwise.
//!
//! ```
//! use quilt::{Path, Renderer, TemplateRegistry, Value, data};
//!
//! let mut templates = TemplateRegistry::new();
//! templates.register("a/a", |data: &Value| {
//!     let href = data.get("a__href").map(ToString::to_string).unwrap_or_default();
//!     let content = data.get("a__content").map(ToString::to_string).unwrap_or_default();
//!     format!(r#"<a href="{href}">{content}</a>"#)
//! });
//!
//! let mut tree = data! {
//!     "link" => "#docs",
//!     "nav" => data! {
//!         "__render" => "a/a",
//!         "a__href" => "%{link}",
//!         "a__content" => "Documentation",
//!     },
//! };
//!
//! let renderer = Renderer::builder().templates(templates).build();
//! let path = Path::parse("$.nav").unwrap();
//! let html = renderer.render_at(&mut tree, &path).unwrap();
//! assert_eq!(html.to_string(), r##"<a href="#docs">Documentation</a>"##);
//! ```

pub mod engine;
pub mod parser;
pub mod types;

pub use engine::{
    Defaults, RenderError, Renderer, TemplateFn, TemplateRegistry, compute_suggestions, force,
    interpolate, render, resolve_thunks,
};
pub use types::{Map, Path, RENDER_KEY, Step, TemplateId, Thunk, Value};

/// Creates a [`Value::Object`] from key-value pairs.
///
/// Values are converted via `Into<Value>`, so strings, numbers, booleans,
/// vectors, and nested `data!` trees can be mixed freely. Key insertion
/// order is preserved.
///
/// # Example
///
/// ```
/// use quilt::data;
///
/// let tree = data! {
///     "__render" => "p/p",
///     "p__classes" => vec!["intro"],
///     "p__content" => "Test paragraph.",
/// };
/// assert_eq!(tree.render_id(), Some("p/p"));
/// assert_eq!(tree.get("p__content").and_then(|v| v.as_str()), Some("Test paragraph."));
/// ```
#[macro_export]
macro_rules! data {
    {} => {
        $crate::Value::Object($crate::Map::new())
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Map::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            $crate::Value::Object(map)
        }
    };
}
