//! # Stylebook - named utility-class tokens for web UIs
//!
//! Stylebook keeps the presentational class strings of an application in
//! one place: buttons, cards, layouts, typography and so on. Components ask
//! for a token by `(category, variant)` instead of repeating class lists.
//!
//! ## Core Concepts
//!
//! - [`Category`]: the closed set of token groups (`buttons`, `cards`, ...)
//! - [`catalog`]: the authored tokens, one module per category
//! - [`Registry`]: an immutable category -> variant -> token map with
//!   per-category defaults
//! - [`compose_tokens`]: joins tokens into one class string
//!
//! ## Quick Start
//!
//! ```rust
//! use stylebook::{compose_tokens, get_token, Category};
//!
//! let button = get_token(Category::Buttons, "primary");
//! assert!(button.contains("bg-blue-600"));
//!
//! // Unknown variants fall back to the category default
//! assert_eq!(
//!     get_token(Category::Cards, "missingVariant"),
//!     get_token(Category::Cards, "base"),
//! );
//!
//! let class = compose_tokens([
//!     get_token(Category::Layouts, "flex-between"),
//!     get_token(Category::Spacing, "inline-md"),
//! ]);
//! assert_eq!(class, "flex items-center justify-between space-x-4");
//! ```
//!
//! ## Fallback Rules
//!
//! A missing *variant* is expected (variant names often come from data or
//! configuration) and silently resolves to the category default. A missing
//! *category* is a caller defect: typed lookups make it unrepresentable and
//! string-keyed lookups ([`Registry::lookup`]) return
//! [`RegistryError::UnknownCategory`].
//!
//! ## Custom Registries
//!
//! The built-in registry never changes. Applications that restyle tokens
//! derive their own with [`Registry::to_builder`] or load one from YAML with
//! [`Registry::from_yaml`]. See [`RegistryBuilder`].
//!
//! ## Templates
//!
//! [`render_template`] and [`register_filters`] expose tokens to MiniJinja
//! templates through a `token(category, variant)` function and a `classes`
//! filter.

pub mod catalog;
mod category;
mod compose;
mod registry;
mod render;

pub use category::Category;
pub use compose::{compose_tokens, TOKEN_SEPARATOR};
pub use registry::{builtin, CategoryTokens, Registry, RegistryBuilder, RegistryError};
pub use render::{environment, register_filters, render_template};

/// Resolves a token from the built-in registry.
///
/// If `variant` doesn't exist in `category`, the category's default token
/// is returned. The returned string lives for the whole process.
pub fn get_token(category: Category, variant: &str) -> &'static str {
    builtin().get_token(category, variant)
}

/// Shorthand for `get_token(Category::Buttons, variant)`.
pub fn button_class(variant: &str) -> &'static str {
    get_token(Category::Buttons, variant)
}

/// Shorthand for `get_token(Category::Cards, variant)`.
pub fn card_class(variant: &str) -> &'static str {
    get_token(Category::Cards, variant)
}
