use std::cell::RefCell;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use super::Path;

/// A deferred, memoizing interpolation.
///
/// The interpolator produces a `Thunk` for a string value whose entire
/// remainder is a single trailing `%{name}` placeholder. The thunk records
/// the literal text before the placeholder, the placeholder's variable name,
/// and the context path of the string it replaced. Forcing it resolves the
/// variable against the root tree and caches the result: the computation runs
/// at most once per thunk instance, and every later invocation returns the
/// cached text unchanged.
///
/// Clones share the memo cell, so a thunk stored in the tree and a thunk
/// returned to the caller resolve together.
///
/// # Example
///
/// ```
/// use quilt::{Path, Thunk};
///
/// let thunk = Thunk::new("hello ", "name", Path::root());
/// let mut calls = 0;
/// let first = thunk
///     .force_with(|| -> Result<String, ()> {
///         calls += 1;
///         Ok("world".to_string())
///     })
///     .unwrap();
/// assert_eq!(first, "hello world");
///
/// // Second force returns the cached text without recomputing.
/// let second = thunk.force_with(|| -> Result<String, ()> { Err(()) }).unwrap();
/// assert_eq!(second, "hello world");
/// assert_eq!(calls, 1);
/// ```
#[derive(Clone)]
pub struct Thunk {
    /// Literal text preceding the placeholder.
    prefix: String,
    /// Variable name inside the placeholder.
    name: String,
    /// Context path of the string this thunk replaced.
    context: Path,
    /// Shared memo cell; filled on first successful force.
    cell: Rc<RefCell<Option<String>>>,
}

impl Thunk {
    /// Create an unresolved thunk.
    pub fn new(prefix: impl Into<String>, name: impl Into<String>, context: Path) -> Self {
        Self {
            prefix: prefix.into(),
            name: name.into(),
            context,
            cell: Rc::new(RefCell::new(None)),
        }
    }

    /// The variable name this thunk resolves.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal text prepended to the resolved variable.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The context path the resolution starts from.
    pub fn context(&self) -> &Path {
        &self.context
    }

    /// Whether this thunk has been forced.
    pub fn is_resolved(&self) -> bool {
        self.cell.borrow().is_some()
    }

    /// The cached result, if this thunk has been forced.
    pub fn cached(&self) -> Option<String> {
        self.cell.borrow().clone()
    }

    /// Force this thunk with `resolve` producing the variable's value.
    ///
    /// On the first successful call the prefix is prepended, the result is
    /// stored in the memo cell, and the combined text is returned. Later
    /// calls return the stored text without invoking `resolve`. Errors are
    /// returned as-is and not memoized, so a later force retries.
    pub fn force_with<E>(
        &self,
        resolve: impl FnOnce() -> Result<String, E>,
    ) -> Result<String, E> {
        if let Some(cached) = self.cell.borrow().as_ref() {
            return Ok(cached.clone());
        }
        let resolved = resolve()?;
        let text = format!("{}{}", self.prefix, resolved);
        *self.cell.borrow_mut() = Some(text.clone());
        Ok(text)
    }

    /// The `%{...}` source text this thunk was parsed from.
    pub fn source(&self) -> String {
        format!("{}%{{{}}}", self.prefix, self.name)
    }
}

/// Displays the cached text once forced, the original source before.
impl Display for Thunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.cell.borrow().as_ref() {
            Some(cached) => write!(f, "{cached}"),
            None => write!(f, "{}", self.source()),
        }
    }
}

impl std::fmt::Debug for Thunk {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Thunk")
            .field("prefix", &self.prefix)
            .field("name", &self.name)
            .field("context", &self.context.to_string())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Thunks are equal when they share the same memo cell.
impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.cell, &other.cell)
    }
}
