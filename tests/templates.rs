//! Rendering tokens through MiniJinja templates.

use minijinja::Environment;
use serde::Serialize;
use stylebook::{builtin, get_token, register_filters, render_template, Category};

#[derive(Serialize)]
struct Card {
    title: String,
    featured: bool,
}

#[test]
fn test_render_card_markup() {
    let template = r#"<div class="{{ [token('cards', 'interactive'), token('animations', 'hover-lift') if featured] | classes }}">{{ title }}</div>"#;

    let html = render_template(
        template,
        &Card {
            title: "Plans".into(),
            featured: true,
        },
    )
    .unwrap();

    let expected_class = format!(
        "{} {}",
        get_token(Category::Cards, "interactive"),
        get_token(Category::Animations, "hover-lift")
    );
    assert_eq!(html, format!(r#"<div class="{}">Plans</div>"#, expected_class));
}

#[test]
fn test_custom_registry_in_environment() {
    let registry = builtin()
        .to_builder()
        .token(Category::Badges, "neutral", "badge")
        .build()
        .unwrap();

    let mut env = Environment::new();
    register_filters(&mut env, registry);
    env.add_template("badge", "{{ token('badges', kind) }}")
        .unwrap();

    let tmpl = env.get_template("badge").unwrap();
    let output = tmpl
        .render(minijinja::context! { kind => "missing" })
        .unwrap();
    assert_eq!(output, "badge");
}

#[test]
fn test_unknown_category_fails_render() {
    let result = render_template("{{ token('carousel', 'base') }}", &());
    let err = result.unwrap_err();
    assert!(err.to_string().contains("carousel"));
}
