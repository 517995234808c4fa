//! Integration tests for placeholder string scanning.

use quilt::parser::{Segment, parse_template};

// =============================================================================
// Literal Text
// =============================================================================

#[test]
fn plain_text_is_one_literal() {
    let t = parse_template("no placeholders here");
    assert_eq!(
        t.segments,
        vec![Segment::Literal("no placeholders here".to_string())]
    );
    assert!(!t.has_placeholder());
}

#[test]
fn empty_string_has_no_segments() {
    let t = parse_template("");
    assert!(t.segments.is_empty());
    assert!(!t.has_placeholder());
    assert!(t.trailing_placeholder().is_none());
}

#[test]
fn stray_closing_brace_is_literal() {
    let t = parse_template("a } b");
    assert_eq!(t.segments, vec![Segment::Literal("a } b".to_string())]);
}

// =============================================================================
// Placeholders
// =============================================================================

#[test]
fn single_placeholder() {
    let t = parse_template("%{name}");
    assert_eq!(t.segments, vec![Segment::Placeholder("name".to_string())]);
    assert_eq!(t.trailing_placeholder(), Some(("", "name")));
}

#[test]
fn prefix_and_trailing_placeholder() {
    let t = parse_template("hello %{name}");
    assert_eq!(t.trailing_placeholder(), Some(("hello ", "name")));
}

#[test]
fn text_after_placeholder_is_not_trailing() {
    let t = parse_template("hello %{name}!");
    assert!(t.trailing_placeholder().is_none());
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("hello ".to_string()),
            Segment::Placeholder("name".to_string()),
            Segment::Literal("!".to_string()),
        ]
    );
}

#[test]
fn multiple_placeholders() {
    let t = parse_template("a is %{a} and b is %{b}.");
    assert_eq!(
        t.segments,
        vec![
            Segment::Literal("a is ".to_string()),
            Segment::Placeholder("a".to_string()),
            Segment::Literal(" and b is ".to_string()),
            Segment::Placeholder("b".to_string()),
            Segment::Literal(".".to_string()),
        ]
    );
    assert!(t.trailing_placeholder().is_none());
}

#[test]
fn adjacent_placeholders_are_not_trailing() {
    let t = parse_template("%{a}%{b}");
    assert_eq!(
        t.segments,
        vec![
            Segment::Placeholder("a".to_string()),
            Segment::Placeholder("b".to_string()),
        ]
    );
    assert!(t.trailing_placeholder().is_none());
}

#[test]
fn placeholder_names_keep_inner_text() {
    let t = parse_template("%{field__name}");
    assert_eq!(
        t.segments,
        vec![Segment::Placeholder("field__name".to_string())]
    );
}

// =============================================================================
// Malformed Syntax Stays Literal
// =============================================================================

#[test]
fn unterminated_placeholder_is_literal() {
    let t = parse_template("oops %{name");
    assert_eq!(t.segments, vec![Segment::Literal("oops %{name".to_string())]);
    assert!(!t.has_placeholder());
}

#[test]
fn empty_placeholder_is_literal() {
    let t = parse_template("%{}");
    assert_eq!(t.segments, vec![Segment::Literal("%{}".to_string())]);
    assert!(!t.has_placeholder());
}

#[test]
fn percent_without_brace_is_literal() {
    let t = parse_template("100% done");
    assert_eq!(t.segments, vec![Segment::Literal("100% done".to_string())]);
}
