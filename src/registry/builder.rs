//! Builder and YAML definitions for custom registries.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::error::RegistryError;
use super::registry::{CategoryTokens, Registry};
use crate::category::Category;

/// Category entry in a YAML definition.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoryDef {
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    variants: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default)]
struct PendingCategory {
    default: Option<String>,
    variants: BTreeMap<String, String>,
}

/// Collects tokens and defaults for a new [`Registry`].
///
/// Nothing is checked until [`build`](RegistryBuilder::build), which
/// requires every category to be present with a default variant that it
/// actually defines.
///
/// # Example
///
/// ```rust
/// use stylebook::{builtin, Category};
///
/// // Rebrand the primary button, keep everything else
/// let registry = builtin()
///     .to_builder()
///     .token(Category::Buttons, "primary", "btn btn-brand")
///     .build()
///     .unwrap();
///
/// assert_eq!(registry.get_token(Category::Buttons, "primary"), "btn btn-brand");
/// assert_eq!(registry.get_token(Category::Buttons, "nope"), "btn btn-brand");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    categories: BTreeMap<Category, PendingCategory>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_registry(registry: &Registry) -> Self {
        let categories = Category::ALL
            .iter()
            .map(|&category| {
                let table = registry.category(category);
                let pending = PendingCategory {
                    default: Some(table.default.clone()),
                    variants: table.variants.clone(),
                };
                (category, pending)
            })
            .collect();
        Self { categories }
    }

    /// Adds a token, replacing any existing token for the same variant.
    pub fn token(
        mut self,
        category: Category,
        variant: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.categories
            .entry(category)
            .or_default()
            .variants
            .insert(variant.into(), token.into());
        self
    }

    /// Sets the variant a category falls back to.
    pub fn default_variant(mut self, category: Category, variant: impl Into<String>) -> Self {
        self.categories.entry(category).or_default().default = Some(variant.into());
        self
    }

    /// Overlays a YAML definition onto the builder.
    ///
    /// Tokens in the YAML replace tokens with the same variant name; a
    /// `default` key replaces the category default. Categories and variants
    /// not mentioned are kept.
    ///
    /// ```yaml
    /// buttons:
    ///   default: primary
    ///   variants:
    ///     primary: "btn btn-primary"
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Parse`] for malformed YAML or unknown fields
    /// and [`RegistryError::UnknownCategory`] for unrecognized category keys.
    pub fn merge_yaml(mut self, yaml: &str) -> Result<Self, RegistryError> {
        let defs: Option<BTreeMap<String, CategoryDef>> =
            serde_yaml::from_str(yaml).map_err(|e| RegistryError::Parse {
                message: e.to_string(),
            })?;

        for (name, def) in defs.unwrap_or_default() {
            let category: Category = name.parse()?;
            let pending = self.categories.entry(category).or_default();
            if let Some(default) = def.default {
                pending.default = Some(default);
            }
            log::debug!(
                "merging {} style tokens into '{}'",
                def.variants.len(),
                category
            );
            pending.variants.extend(def.variants);
        }

        Ok(self)
    }

    /// Validates the collected definitions and builds the registry.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::MissingCategory`] if a category was never defined
    /// - [`RegistryError::MissingDefault`] if a category has no default
    /// - [`RegistryError::UndefinedDefault`] if the default names no token
    pub fn build(mut self) -> Result<Registry, RegistryError> {
        let mut tables = Vec::with_capacity(Category::ALL.len());

        for category in Category::ALL {
            let pending = self
                .categories
                .remove(&category)
                .ok_or(RegistryError::MissingCategory { category })?;
            let default = pending
                .default
                .ok_or(RegistryError::MissingDefault { category })?;
            if !pending.variants.contains_key(&default) {
                return Err(RegistryError::UndefinedDefault {
                    category,
                    variant: default,
                });
            }
            tables.push(CategoryTokens {
                default,
                variants: pending.variants,
            });
        }

        Ok(Registry::from_tables(tables))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::builtin;

    fn complete_builder() -> RegistryBuilder {
        Category::ALL
            .iter()
            .fold(RegistryBuilder::new(), |builder, &category| {
                builder
                    .token(category, "base", format!("{}-base", category))
                    .default_variant(category, "base")
            })
    }

    #[test]
    fn test_build_complete() {
        let registry = complete_builder().build().unwrap();
        assert_eq!(registry.get_token(Category::Spacing, "base"), "spacing-base");
        assert_eq!(registry.get_token(Category::Spacing, "other"), "spacing-base");
    }

    #[test]
    fn test_build_missing_category() {
        let result = RegistryBuilder::new()
            .token(Category::Buttons, "primary", "btn")
            .default_variant(Category::Buttons, "primary")
            .build();
        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingCategory {
                category: Category::Cards
            }
        );
    }

    #[test]
    fn test_build_missing_default() {
        let result = RegistryBuilder::new()
            .token(Category::Buttons, "primary", "btn")
            .build();
        assert_eq!(
            result.unwrap_err(),
            RegistryError::MissingDefault {
                category: Category::Buttons
            }
        );
    }

    #[test]
    fn test_build_undefined_default() {
        let result = complete_builder()
            .default_variant(Category::Badges, "ghost")
            .build();
        assert_eq!(
            result.unwrap_err(),
            RegistryError::UndefinedDefault {
                category: Category::Badges,
                variant: "ghost".to_string()
            }
        );
    }

    #[test]
    fn test_token_replaces_existing() {
        let registry = complete_builder()
            .token(Category::Cards, "base", "first")
            .token(Category::Cards, "base", "second")
            .build()
            .unwrap();
        assert_eq!(registry.get_token(Category::Cards, "base"), "second");
    }

    #[test]
    fn test_to_builder_round_trip() {
        let rebuilt = builtin().to_builder().build().unwrap();
        assert_eq!(&rebuilt, builtin());
    }

    #[test]
    fn test_derived_registry_leaves_builtin_untouched() {
        let original = builtin().get_token(Category::Badges, "info").to_string();
        let derived = builtin()
            .to_builder()
            .token(Category::Badges, "info", "badge-info")
            .build()
            .unwrap();

        assert_eq!(derived.get_token(Category::Badges, "info"), "badge-info");
        assert_eq!(builtin().get_token(Category::Badges, "info"), original);
    }

    #[test]
    fn test_merge_yaml_overlay() {
        let yaml = r#"
buttons:
  default: brand
  variants:
    brand: "btn btn-brand"
"#;
        let registry = builtin()
            .to_builder()
            .merge_yaml(yaml)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.default_variant(Category::Buttons), "brand");
        assert_eq!(registry.get_token(Category::Buttons, "missing"), "btn btn-brand");
        assert!(registry.has(Category::Buttons, "primary"));
    }

    #[test]
    fn test_merge_yaml_keeps_default_when_omitted() {
        let yaml = "cards:\n  variants:\n    glass: \"card card-glass\"\n";
        let registry = builtin()
            .to_builder()
            .merge_yaml(yaml)
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(registry.default_variant(Category::Cards), "base");
        assert_eq!(registry.get_token(Category::Cards, "glass"), "card card-glass");
    }

    #[test]
    fn test_merge_yaml_unknown_category() {
        let yaml = "widgets:\n  default: a\n  variants:\n    a: \"x\"\n";
        let result = RegistryBuilder::new().merge_yaml(yaml);
        assert!(matches!(
            result,
            Err(RegistryError::UnknownCategory { ref name }) if name == "widgets"
        ));
    }

    #[test]
    fn test_merge_yaml_unknown_field() {
        let yaml = "cards:\n  fallback: base\n";
        let result = RegistryBuilder::new().merge_yaml(yaml);
        assert!(matches!(result, Err(RegistryError::Parse { .. })));
    }

    #[test]
    fn test_merge_yaml_malformed() {
        let result = RegistryBuilder::new().merge_yaml("cards: [unclosed");
        assert!(matches!(result, Err(RegistryError::Parse { .. })));
    }
}
