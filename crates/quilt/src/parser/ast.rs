//! Public AST types for placeholder strings.

/// A string scanned into literal and placeholder segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub segments: Vec<Segment>,
}

/// A segment within a scanned string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text (no interpolation).
    Literal(String),
    /// A `%{name}` placeholder referencing a variable.
    Placeholder(String),
}

impl Template {
    /// Whether any placeholder occurs in the string.
    pub fn has_placeholder(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Placeholder(_)))
    }

    /// The `(prefix, name)` pair of a string whose entire remainder is one
    /// trailing placeholder.
    ///
    /// This is the shape the interpolator defers: an optional literal prefix
    /// followed by exactly one final placeholder with no text after it.
    /// Returns `None` for every other segment sequence.
    pub fn trailing_placeholder(&self) -> Option<(&str, &str)> {
        match self.segments.as_slice() {
            [Segment::Placeholder(name)] => Some(("", name)),
            [Segment::Literal(prefix), Segment::Placeholder(name)] => Some((prefix, name)),
            _ => None,
        }
    }
}
