//! Registry errors.

use std::path::PathBuf;

use crate::category::Category;

/// Error returned by string-keyed lookups and registry construction.
///
/// A missing *variant* is never an error: lookups fall back to the
/// category default. Everything here indicates a caller or configuration
/// defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// A category name outside the closed set of categories.
    #[error("unknown style category '{name}'")]
    UnknownCategory { name: String },

    /// A registry being built has no entry for a category.
    #[error("category '{category}' is not defined")]
    MissingCategory { category: Category },

    /// A category was defined without naming its default variant.
    #[error("category '{category}' has no default variant")]
    MissingDefault { category: Category },

    /// The default variant names a variant the category does not contain.
    #[error("default variant '{variant}' of category '{category}' has no token")]
    UndefinedDefault { category: Category, variant: String },

    /// A YAML definition could not be parsed.
    #[error("invalid registry definition: {message}")]
    Parse { message: String },

    /// The registry could not be serialized.
    #[error("failed to export registry: {message}")]
    Export { message: String },

    /// A definition file could not be read.
    #[error("failed to read registry file '{}': {}", .path.display(), .message)]
    Read { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = RegistryError::UnknownCategory {
            name: "widgets".to_string(),
        };
        assert_eq!(err.to_string(), "unknown style category 'widgets'");
    }

    #[test]
    fn test_undefined_default_display() {
        let err = RegistryError::UndefinedDefault {
            category: Category::Cards,
            variant: "base".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("cards"));
        assert!(msg.contains("'base'"));
    }

    #[test]
    fn test_read_error_display() {
        let err = RegistryError::Read {
            path: PathBuf::from("/tmp/tokens.yaml"),
            message: "not found".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tmp/tokens.yaml"));
        assert!(msg.contains("not found"));
    }
}
