//! Template integration.
//!
//! Server-rendered pages interpolate tokens into `class` attributes at
//! render time. This module wires the registry into a MiniJinja
//! [`Environment`] so templates can resolve tokens by name:
//!
//! ```jinja
//! <button class="{{ token('buttons', variant) }}">Save</button>
//! <div class="{{ [token('cards', 'base'), token('animations', 'hover-lift')] | classes }}">
//! ```

mod filters;

use minijinja::{Environment, Error};
use serde::Serialize;

use crate::registry::builtin;

pub use filters::register_filters;

/// Creates an environment wired to the built-in registry.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    register_filters(&mut env, builtin().clone());
    env
}

/// Renders a template string against the built-in registry.
///
/// # Example
///
/// ```rust
/// use stylebook::{render_template, get_token, Category};
///
/// let html = render_template(
///     r#"<span class="{{ token('badges', kind) }}">new</span>"#,
///     &serde_json::json!({ "kind": "success" }),
/// ).unwrap();
/// assert!(html.contains(get_token(Category::Badges, "success")));
/// ```
///
/// # Errors
///
/// Returns an error if the template is invalid, names an unknown category,
/// or fails to render.
pub fn render_template<T: Serialize>(template: &str, data: &T) -> Result<String, Error> {
    environment().render_str(template, data)
}
