//! The immutable token registry.

use std::collections::BTreeMap;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::builder::RegistryBuilder;
use super::error::RegistryError;
use crate::catalog;
use crate::category::Category;

/// The tokens of one category together with its default variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTokens {
    pub(crate) default: String,
    pub(crate) variants: BTreeMap<String, String>,
}

impl CategoryTokens {
    /// The variant used when a lookup names a variant that doesn't exist.
    pub fn default_variant(&self) -> &str {
        &self.default
    }

    /// The token of the default variant.
    pub fn default_token(&self) -> &str {
        self.variants
            .get(&self.default)
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Looks up a variant exactly.
    pub fn resolve(&self, variant: &str) -> Option<&str> {
        self.variants.get(variant).map(String::as_str)
    }

    /// Returns `(variant, token)` pairs sorted by variant name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.variants
            .iter()
            .map(|(name, token)| (name.as_str(), token.as_str()))
    }

    /// Number of variants in the category.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Returns true if the category has no variants.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }
}

/// A complete, read-only mapping from category to variant to token.
///
/// A `Registry` always defines every [`Category`] and every category's
/// default variant exists, so typed lookups never fail. Registries are
/// only created through [`RegistryBuilder::build`] (which enforces this),
/// through the YAML loaders, or as the built-in catalog returned by
/// [`builtin`]. There is no way to mutate one after construction; derive a
/// new registry with [`Registry::to_builder`] instead.
///
/// # Example
///
/// ```rust
/// use stylebook::{builtin, Category};
///
/// let registry = builtin();
/// let primary = registry.get_token(Category::Buttons, "primary");
/// assert!(primary.contains("hover:bg-blue-700"));
///
/// // Unknown variants degrade to the category default
/// assert_eq!(
///     registry.get_token(Category::Cards, "missingVariant"),
///     registry.get_token(Category::Cards, "base"),
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    // Indexed by `Category as usize`, one entry per `Category::ALL`.
    tables: Vec<CategoryTokens>,
}

static BUILTIN: Lazy<Registry> = Lazy::new(|| {
    let registry = Registry::from_catalog();
    log::trace!(
        "built-in style registry initialized with {} tokens",
        registry.token_count()
    );
    registry
});

/// Returns the process-wide registry built from [`catalog`].
///
/// The registry is assembled on first use and shared for the rest of the
/// process lifetime.
pub fn builtin() -> &'static Registry {
    &BUILTIN
}

impl Registry {
    fn from_catalog() -> Self {
        let tables = Category::ALL
            .iter()
            .map(|&category| CategoryTokens {
                default: catalog::default_variant(category).to_string(),
                variants: catalog::entries(category)
                    .iter()
                    .map(|(name, token)| (name.to_string(), token.to_string()))
                    .collect(),
            })
            .collect();
        Self { tables }
    }

    /// Assembles a registry from tables that are already validated, in
    /// `Category::ALL` order.
    pub(crate) fn from_tables(tables: Vec<CategoryTokens>) -> Self {
        debug_assert_eq!(tables.len(), Category::ALL.len());
        Self { tables }
    }

    /// Parses a complete registry from a YAML definition.
    ///
    /// # Errors
    ///
    /// Fails if the YAML is malformed, names an unknown category, or leaves
    /// a category or default undefined.
    pub fn from_yaml(yaml: &str) -> Result<Self, RegistryError> {
        RegistryBuilder::new().merge_yaml(yaml)?.build()
    }

    /// Reads and parses a complete registry from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Read`] if the file can't be read, otherwise
    /// the same errors as [`Registry::from_yaml`].
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|e| RegistryError::Read {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_yaml(&yaml)
    }

    /// Returns a builder seeded with this registry's tokens and defaults.
    pub fn to_builder(&self) -> RegistryBuilder {
        RegistryBuilder::from_registry(self)
    }

    /// Returns the tokens of a category.
    pub fn category(&self, category: Category) -> &CategoryTokens {
        &self.tables[category as usize]
    }

    /// Resolves `variant` within `category`.
    ///
    /// If the variant doesn't exist the category's default token is returned
    /// instead. This never fails.
    pub fn get_token(&self, category: Category, variant: &str) -> &str {
        let table = self.category(category);
        match table.resolve(variant) {
            Some(token) => token,
            None => {
                log::debug!(
                    "style variant '{}' not found in '{}', using default '{}'",
                    variant,
                    category,
                    table.default
                );
                table.default_token()
            }
        }
    }

    /// Resolves a string-keyed `(category, variant)` pair.
    ///
    /// Variants fall back exactly like [`Registry::get_token`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownCategory`] if `category` names no
    /// category.
    pub fn lookup(&self, category: &str, variant: &str) -> Result<&str, RegistryError> {
        let category: Category = category.parse()?;
        Ok(self.get_token(category, variant))
    }

    /// Resolves a variant without falling back to the default.
    pub fn get_exact(&self, category: Category, variant: &str) -> Option<&str> {
        self.category(category).resolve(variant)
    }

    /// Returns true if the category defines `variant`.
    pub fn has(&self, category: Category, variant: &str) -> bool {
        self.get_exact(category, variant).is_some()
    }

    /// Returns the variant names of a category, sorted.
    pub fn variants(&self, category: Category) -> impl Iterator<Item = &str> {
        self.category(category).variants.keys().map(String::as_str)
    }

    /// Returns the default variant name of a category.
    pub fn default_variant(&self, category: Category) -> &str {
        self.category(category).default_variant()
    }

    /// Returns the token of a category's default variant.
    pub fn default_token(&self, category: Category) -> &str {
        self.category(category).default_token()
    }

    /// Total number of tokens across all categories.
    pub fn token_count(&self) -> usize {
        self.tables.iter().map(CategoryTokens::len).sum()
    }

    /// Serializes the registry in the YAML definition format.
    ///
    /// The output can be fed back to [`Registry::from_yaml`].
    pub fn to_yaml(&self) -> Result<String, RegistryError> {
        serde_yaml::to_string(self).map_err(|e| RegistryError::Export {
            message: e.to_string(),
        })
    }

    /// Serializes the registry as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, RegistryError> {
        serde_json::to_string_pretty(self).map_err(|e| RegistryError::Export {
            message: e.to_string(),
        })
    }
}

impl Serialize for Registry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for category in Category::ALL {
            map.serialize_entry(&category, self.category(category))?;
        }
        map.end()
    }
}
