//! Placeholder and context-path parsers.
//!
//! This module scans string values into literal/placeholder segments for the
//! interpolator and parses `$`-rooted context path expressions. The segment
//! AST is public to keep the thunk-shape recognition inspectable.

pub mod ast;
pub mod error;
mod path;
mod template;

pub use ast::{Segment, Template};
pub use error::ParseError;
pub use path::parse_path;
pub use template::parse_template;
