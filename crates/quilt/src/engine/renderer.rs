//! Builder-assembled rendering facade.

use bon::Builder;

use super::error::RenderError;
use super::interpolate;
use super::registry::{Defaults, TemplateRegistry};
use super::render;
use crate::types::{Path, Thunk, Value};

/// A template table and its defaults, bundled behind a builder.
///
/// The free functions in [`crate::engine`] remain the primitive API; the
/// facade carries the two tables so call sites stop threading them.
///
/// # Example
///
/// ```
/// use quilt::{Renderer, TemplateRegistry, Value, data};
///
/// let mut templates = TemplateRegistry::new();
/// templates.register("p/p", |data: &Value| {
///     let content = data.get("p__content").map(ToString::to_string).unwrap_or_default();
///     format!("<p>{content}</p>")
/// });
///
/// let renderer = Renderer::builder().templates(templates).build();
/// let mut tree = data! { "__render" => "p/p", "p__content" => "Test paragraph." };
/// let html = renderer.render(&mut tree).unwrap();
/// assert_eq!(html.to_string(), "<p>Test paragraph.</p>");
/// ```
#[derive(Builder)]
pub struct Renderer {
    /// Render functions keyed by template identifier.
    templates: TemplateRegistry,

    /// Default data merged beneath matching descriptors.
    #[builder(default)]
    defaults: Defaults,
}

impl Renderer {
    /// Render the whole tree.
    pub fn render(&self, root: &mut Value) -> Result<Value, RenderError> {
        render::render(root, &self.templates, &self.defaults, &Path::root())
    }

    /// Render the subtree at `context`.
    pub fn render_at(&self, root: &mut Value, context: &Path) -> Result<Value, RenderError> {
        render::render(root, &self.templates, &self.defaults, context)
    }

    /// Interpolate the subtree at `context`.
    pub fn interpolate(&self, root: &mut Value, context: &Path) -> Result<Value, RenderError> {
        interpolate::interpolate(root, &self.templates, &self.defaults, context)
    }

    /// Force every thunk in the subtree at `context`.
    pub fn resolve_thunks(&self, root: &mut Value, context: &Path) -> Result<(), RenderError> {
        interpolate::resolve_thunks(root, &self.templates, &self.defaults, context)
    }

    /// Force one thunk against the tree.
    pub fn force(&self, thunk: &Thunk, root: &mut Value) -> Result<String, RenderError> {
        interpolate::force(thunk, root, &self.templates, &self.defaults)
    }

    /// The template table.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// The defaults table.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }
}
