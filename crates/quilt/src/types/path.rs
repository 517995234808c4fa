use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::parser::{ParseError, parse_path};

/// One step along a context path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Step {
    /// A named field of a mapping node.
    Key(String),
    /// An index into a sequence node.
    Index(usize),
}

/// The address of a node within a root data tree.
///
/// A path is the root marker `$` followed by the exact sequence of keys and
/// indices traversed from the root. Paths are used for variable lookup
/// (walking ancestors toward the root) and for writing rendered results back
/// into the tree.
///
/// # Example
///
/// ```
/// use quilt::{Path, Step};
///
/// let path = Path::parse("$.page.body[0]").unwrap();
/// assert_eq!(path.steps().len(), 3);
/// assert_eq!(path.to_string(), "$.page.body[0]");
///
/// let child = path.child_key("content");
/// assert_eq!(child.to_string(), "$.page.body[0].content");
/// assert_eq!(child.parent(), Some(path));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    steps: Vec<Step>,
}

impl Path {
    /// The root path `$`.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a path from a step sequence.
    pub fn from_steps(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a path expression such as `$.a[0].b` or `$['a key']`.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_path(input)
    }

    /// Whether this is the root marker.
    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }

    /// The steps from the root to the addressed node.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The path of this node's `key` field.
    pub fn child_key(&self, key: impl Into<String>) -> Path {
        let mut steps = self.steps.clone();
        steps.push(Step::Key(key.into()));
        Path { steps }
    }

    /// The path of this node's element at `index`.
    pub fn child_index(&self, index: usize) -> Path {
        let mut steps = self.steps.clone();
        steps.push(Step::Index(index));
        Path { steps }
    }

    /// The enclosing path, or `None` for the root.
    pub fn parent(&self) -> Option<Path> {
        if self.steps.is_empty() {
            return None;
        }
        Some(Path {
            steps: self.steps[..self.steps.len() - 1].to_vec(),
        })
    }

    /// This path and every ancestor, deepest first, root last.
    ///
    /// This is the lookup order for nearest-ancestor variable resolution:
    /// the closest enclosing context wins, the root is checked last, and the
    /// walk never ascends outside the root.
    ///
    /// ```
    /// use quilt::Path;
    ///
    /// let path = Path::parse("$.a[1]").unwrap();
    /// let contexts: Vec<String> =
    ///     path.self_and_ancestors().map(|p| p.to_string()).collect();
    /// assert_eq!(contexts, ["$.a[1]", "$.a", "$"]);
    /// ```
    pub fn self_and_ancestors(&self) -> impl Iterator<Item = Path> + '_ {
        (0..=self.steps.len()).rev().map(|len| Path {
            steps: self.steps[..len].to_vec(),
        })
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "$")?;
        for step in &self.steps {
            match step {
                Step::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                Step::Key(key) => write!(f, "['{key}']")?,
                Step::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// Whether a key can be written in dotted form rather than bracket-quoted.
fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
