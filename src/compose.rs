//! Token composition.

/// Separator placed between composed tokens.
pub const TOKEN_SEPARATOR: &str = " ";

/// Joins tokens into a single class string, in order, separated by one space.
///
/// Order is kept because the consuming stylesheet may be order-sensitive.
/// Duplicates are kept as well and tokens are never trimmed or split, so
/// composing a single already-composed string returns it unchanged.
///
/// # Example
///
/// ```rust
/// use stylebook::{compose_tokens, get_token, Category};
///
/// let class = compose_tokens([
///     get_token(Category::Cards, "base"),
///     get_token(Category::Animations, "hover-lift"),
/// ]);
/// assert!(class.starts_with("rounded-lg"));
/// assert!(class.ends_with("hover:-translate-y-1"));
///
/// assert_eq!(compose_tokens(["a", "b", "c"]), "a b c");
/// assert_eq!(compose_tokens(Vec::<&str>::new()), "");
/// ```
pub fn compose_tokens<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut composed = String::new();
    for (i, token) in tokens.into_iter().enumerate() {
        if i > 0 {
            composed.push_str(TOKEN_SEPARATOR);
        }
        composed.push_str(token.as_ref());
    }
    composed
}
