//! Placeholder string scanner using winnow.
//!
//! Splits a string into literal text and `%{name}` placeholder segments.
//! The token grammar matches the interpolation syntax exactly: a placeholder
//! is `%{` followed by at least one non-`}` character and a closing `}`.
//! Anything else, including an unterminated `%{` or an empty `%{}`, is
//! literal text.

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use super::ast::{Segment, Template};

/// Scan a string into segments.
///
/// Total function: scanning cannot fail, and a string without placeholder
/// syntax comes back as a single literal segment.
pub fn parse_template(input: &str) -> Template {
    let mut remaining = input;
    match template(&mut remaining) {
        Ok(t) if remaining.is_empty() => t,
        _ => Template {
            segments: vec![Segment::Literal(input.to_string())],
        },
    }
}

/// Parse a complete string into segments.
fn template(input: &mut &str) -> ModalResult<Template> {
    let segments: Vec<Segment> = repeat(0.., segment).parse_next(input)?;

    Ok(Template {
        segments: merge_literals(segments),
    })
}

/// Merge adjacent Literal segments into single segments.
fn merge_literals(segments: Vec<Segment>) -> Vec<Segment> {
    let mut result = Vec::with_capacity(segments.len());

    for segment in segments {
        match segment {
            Segment::Literal(text) => {
                if let Some(Segment::Literal(prev)) = result.last_mut() {
                    prev.push_str(&text);
                } else {
                    result.push(Segment::Literal(text));
                }
            }
            other => result.push(other),
        }
    }

    result
}

/// Parse a single segment (placeholder or literal character).
fn segment(input: &mut &str) -> ModalResult<Segment> {
    alt((placeholder, literal_char)).parse_next(input)
}

/// Parse a placeholder: %{name}
fn placeholder(input: &mut &str) -> ModalResult<Segment> {
    delimited("%{", take_while(1.., |c: char| c != '}'), '}')
        .map(|name: &str| Segment::Placeholder(name.to_string()))
        .parse_next(input)
}

/// Parse a single literal character.
fn literal_char(input: &mut &str) -> ModalResult<Segment> {
    any.map(|c: char| Segment::Literal(c.to_string()))
        .parse_next(input)
}
