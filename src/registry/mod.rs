//! Token registry and lookup.
//!
//! This module provides:
//!
//! - [`Registry`]: a complete, immutable category -> variant -> token map
//! - [`builtin`]: the process-wide registry assembled from the catalog
//! - [`RegistryBuilder`]: construction and YAML overlays for custom registries
//! - [`RegistryError`]: errors from string-keyed lookups and construction
//!
//! Lookups by [`Category`](crate::Category) cannot fail. A missing variant
//! resolves to the category default, while an unknown category can only
//! arise from string keys and is reported as an error.

mod builder;
mod error;
#[allow(clippy::module_inception)]
mod registry;

pub use builder::RegistryBuilder;
pub use error::RegistryError;
pub use registry::{builtin, CategoryTokens, Registry};
