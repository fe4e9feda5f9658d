//! MiniJinja function and filter registration.

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::compose::compose_tokens;
use crate::registry::Registry;

/// Registers the `token` function and the `classes` filter on an environment.
///
/// - `token(category, variant)` resolves a token by name. Unknown variants
///   fall back to the category default; an unknown category is a template
///   error.
/// - `classes` joins a sequence of tokens with single spaces, in order.
///   Undefined and `none` items are skipped so conditional expressions like
///   `[base, extra if active]` work. A plain string passes through unchanged.
pub fn register_filters(env: &mut Environment<'static>, registry: Registry) {
    let registry = Arc::new(registry);

    env.add_function(
        "token",
        move |category: String, variant: String| -> Result<String, Error> {
            registry
                .lookup(&category, &variant)
                .map(str::to_string)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );

    env.add_filter("classes", |value: Value| -> Result<String, Error> {
        if let Some(s) = value.as_str() {
            return Ok(s.to_string());
        }
        let tokens: Vec<String> = value
            .try_iter()?
            .filter(|item| !item.is_undefined() && !item.is_none())
            .map(|item| item.to_string())
            .collect();
        Ok(compose_tokens(&tokens))
    });
}
