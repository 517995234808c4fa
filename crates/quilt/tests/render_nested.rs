//! Integration tests for nested component rendering.

use quilt::{Defaults, Path, RenderError, TemplateRegistry, Value, data, render};

fn text(data: &Value, key: &str) -> String {
    data.get(key).map(ToString::to_string).unwrap_or_default()
}

fn templates() -> TemplateRegistry {
    let mut registry = TemplateRegistry::new();
    registry.register("p/p", |data: &Value| {
        format!("<p>{}</p>", text(data, "p__content"))
    });
    registry.register("a/a", |data: &Value| {
        format!(
            r#"<a href="{}">{}</a>"#,
            text(data, "a__linkURL"),
            text(data, "a__content")
        )
    });
    registry
}

// =============================================================================
// Nested Components
// =============================================================================

#[test]
fn renders_a_component_inside_a_component() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = data! {
        "__render" => "p/p",
        "p__content" => data! {
            "__render" => "a/a",
            "a__content" => "test link",
            "a__linkURL" => "#linkURL1",
        },
    };

    let html = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    insta::assert_snapshot!(
        html.to_string(),
        @r##"<p><a href="#linkURL1">test link</a></p>"##
    );
}

#[test]
fn renders_components_inside_layout_columns() {
    let mut registry = templates();
    registry.register("layout/layout", |data: &Value| {
        let cols = data.get("layout__cols").and_then(Value::as_array).unwrap_or(&[]);
        let cols_html: Vec<String> = cols
            .iter()
            .map(|col| format!(r#"<div class="col">{}</div>"#, text(col, "layout__colContent")))
            .collect();
        format!(r#"<div class="layout">{}</div>"#, cols_html.join(""))
    });
    let defaults = Defaults::new();
    let mut tree = data! {
        "__render" => "layout/layout",
        "layout__cols" => vec![data! {
            "layout__colContent" => vec![
                data! { "__render" => "p/p", "p__content" => "paragraph" },
                data! { "__render" => "a/a", "a__linkURL" => "#linkURL2", "a__content" => "link" },
            ],
        }],
    };

    let html = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(
        html.to_string(),
        r##"<div class="layout"><div class="col"><p>paragraph</p> <a href="#linkURL2">link</a></div></div>"##
    );
}

#[test]
fn renders_at_a_sub_path_and_writes_back() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = data! {
        "header" => data! { "__render" => "p/p", "p__content" => "hi" },
        "other" => 1,
    };

    let path = Path::parse("$.header").unwrap();
    let html = render(&mut tree, &registry, &defaults, &path).unwrap();
    assert_eq!(html, Value::from("<p>hi</p>"));

    // The rendered string replaced its subtree in the original root.
    assert_eq!(tree.get("header"), Some(&Value::from("<p>hi</p>")));
    assert_eq!(tree.get("other"), Some(&Value::Number(1)));
}

#[test]
fn descriptor_fields_interpolate_against_ancestors() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = data! {
        "site" => "Example",
        "hero" => data! { "__render" => "p/p", "p__content" => "Welcome to %{site}!" },
    };

    render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(
        tree.get("hero"),
        Some(&Value::from("<p>Welcome to Example!</p>"))
    );
}

// =============================================================================
// Array Join Rule
// =============================================================================

#[test]
fn joins_rendered_components_with_a_single_space() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = Value::from(vec![
        data! { "__render" => "p/p", "p__content" => "one" },
        data! { "__render" => "p/p", "p__content" => "two" },
    ]);

    let html = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(html, Value::from("<p>one</p> <p>two</p>"));
}

#[test]
fn array_without_components_stays_an_array() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = Value::from(vec!["plain", "values"]);

    let result = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(result, Value::from(vec!["plain", "values"]));
}

#[test]
fn mixed_array_still_joins_when_any_element_is_a_component() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = Value::from(vec![
        Value::from("intro"),
        data! { "__render" => "p/p", "p__content" => "body" },
    ]);

    let html = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(html, Value::from("intro <p>body</p>"));
}

// =============================================================================
// Pass-Through
// =============================================================================

#[test]
fn tree_without_render_keys_round_trips() {
    let registry = templates();
    let defaults = Defaults::new();
    let original = data! {
        "title" => "hello",
        "raw" => "%{left alone}",
        "meta" => data! { "tags" => vec!["a", "b"] },
        "count" => 3,
    };
    let mut tree = original.clone();

    let result = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(result, original);
    assert_eq!(tree, original);
}

#[test]
fn scalar_nodes_pass_through() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = Value::from(42);

    let result = render(&mut tree, &registry, &defaults, &Path::root()).unwrap();
    assert_eq!(result, Value::Number(42));
}

#[test]
fn missing_render_context_is_a_null_pass_through() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = data! { "a" => 1 };

    let result = render(
        &mut tree,
        &registry,
        &defaults,
        &Path::parse("$.absent").unwrap(),
    )
    .unwrap();
    assert_eq!(result, Value::Null);
    assert_eq!(tree, data! { "a" => 1 });
}

// =============================================================================
// Error Handling
// =============================================================================

#[test]
fn missing_template_is_a_hard_error() {
    let registry = templates();
    let defaults = Defaults::new();
    let mut tree = data! { "__render" => "p/x", "p__content" => "hi" };

    let err = render(&mut tree, &registry, &defaults, &Path::root()).unwrap_err();
    match err {
        RenderError::TemplateNotFound {
            id,
            suggestions,
            available,
        } => {
            assert_eq!(id, "p/x");
            assert_eq!(available, ["a/a", "p/p"]);
            assert!(suggestions.contains(&"p/p".to_string()));
        }
        RenderError::MaxDepthExceeded { .. } => panic!("expected a template lookup error"),
    }
}
