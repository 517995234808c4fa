//! Template and default-data tables.

use std::collections::HashMap;

use crate::types::{TemplateId, Value};

/// Template render function signature.
///
/// Takes the component's merged data and returns the rendered markup. The
/// function is an opaque collaborator: any template engine (or a plain
/// closure) can sit behind it, and failures inside it are its own concern.
pub type TemplateFn = Box<dyn Fn(&Value) -> String>;

/// Registry mapping template identifiers to render functions.
///
/// # Example
///
/// ```
/// use quilt::{TemplateRegistry, Value};
///
/// let mut templates = TemplateRegistry::new();
/// templates.register("p/p", |data: &Value| {
///     let content = data.get("p__content").map(ToString::to_string).unwrap_or_default();
///     format!("<p>{content}</p>")
/// });
/// assert!(templates.contains("p/p"));
/// assert_eq!(templates.available(), ["p/p"]);
/// ```
#[derive(Default)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, TemplateFn>,
}

impl TemplateRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a render function for an identifier.
    ///
    /// A later registration for the same identifier replaces the earlier one.
    pub fn register(
        &mut self,
        id: impl Into<TemplateId>,
        template: impl Fn(&Value) -> String + 'static,
    ) {
        self.templates.insert(id.into(), Box::new(template));
    }

    /// Get the render function for an identifier.
    pub fn get(&self, id: &str) -> Option<&TemplateFn> {
        self.templates.get(id)
    }

    /// Check if an identifier has a registered template.
    pub fn contains(&self, id: &str) -> bool {
        self.templates.contains_key(id)
    }

    /// All registered identifiers, sorted, for diagnostics.
    pub fn available(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.templates.keys().map(ToString::to_string).collect();
        ids.sort();
        ids
    }

    /// Number of registered templates.
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl std::fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.available())
            .finish()
    }
}

/// Per-identifier fallback data merged beneath a descriptor's own fields.
///
/// # Example
///
/// ```
/// use quilt::{Defaults, data};
///
/// let mut defaults = Defaults::new();
/// defaults.insert("a/a", data! { "a__classes" => vec!["defaultAClass"] });
/// assert!(defaults.get("a/a").is_some());
/// assert!(defaults.get("p/p").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    entries: HashMap<TemplateId, Value>,
}

impl Defaults {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default data mapping for an identifier.
    pub fn insert(&mut self, id: impl Into<TemplateId>, data: impl Into<Value>) {
        self.entries.insert(id.into(), data.into());
    }

    /// Get the default data mapping for an identifier.
    pub fn get(&self, id: &str) -> Option<&Value> {
        self.entries.get(id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
