//! Context path parser using winnow.
//!
//! Parses `$`-rooted path expressions: `$`, `$.key`, `$[0]`, `$['a key']`
//! and their combinations. Dotted keys are ASCII identifiers; any other key
//! uses the bracket-quoted form.

use winnow::combinator::{alt, delimited, preceded, repeat};
use winnow::prelude::*;
use winnow::token::take_while;

use super::error::ParseError;
use crate::types::{Path, Step};

/// Parse a path expression.
pub fn parse_path(input: &str) -> Result<Path, ParseError> {
    let mut remaining = input;
    match path(&mut remaining) {
        Ok(p) => {
            if remaining.is_empty() {
                Ok(p)
            } else {
                let (line, column) = calculate_position(input, remaining);
                Err(ParseError::Syntax {
                    line,
                    column,
                    message: format!(
                        "unexpected character: '{}'",
                        remaining.chars().next().unwrap_or('?')
                    ),
                })
            }
        }
        Err(e) => {
            let (line, column) = calculate_position(input, remaining);
            Err(ParseError::Syntax {
                line,
                column,
                message: format!("parse error: {}", e),
            })
        }
    }
}

/// Calculate line and column from original input and remaining input.
fn calculate_position(original: &str, remaining: &str) -> (usize, usize) {
    let consumed = original.len() - remaining.len();
    let consumed_str = &original[..consumed];
    let line = consumed_str.chars().filter(|&c| c == '\n').count() + 1;
    let last_newline = consumed_str.rfind('\n');
    let column = match last_newline {
        Some(pos) => consumed - pos,
        None => consumed + 1,
    };
    (line, column)
}

/// Parse the root marker and every step after it.
fn path(input: &mut &str) -> ModalResult<Path> {
    let _ = '$'.parse_next(input)?;
    let steps: Vec<Step> = repeat(0.., step).parse_next(input)?;
    Ok(Path::from_steps(steps))
}

/// Parse one step: .key, ['quoted key'], or [index]
fn step(input: &mut &str) -> ModalResult<Step> {
    alt((dotted_key, quoted_key, index)).parse_next(input)
}

/// Parse a dotted key: .ident
fn dotted_key(input: &mut &str) -> ModalResult<Step> {
    preceded('.', take_while(1.., is_key_char))
        .map(|key: &str| Step::Key(key.to_string()))
        .parse_next(input)
}

/// Parse a bracket-quoted key: ['any text']
fn quoted_key(input: &mut &str) -> ModalResult<Step> {
    delimited("['", take_while(0.., |c: char| c != '\''), "']")
        .map(|key: &str| Step::Key(key.to_string()))
        .parse_next(input)
}

/// Parse a sequence index: [123]
fn index(input: &mut &str) -> ModalResult<Step> {
    delimited('[', take_while(1.., |c: char| c.is_ascii_digit()), ']')
        .try_map(str::parse)
        .map(Step::Index)
        .parse_next(input)
}

/// Check if a character can appear in a dotted key.
fn is_key_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
