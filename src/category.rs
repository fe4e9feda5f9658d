//! The closed set of style categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::registry::RegistryError;

/// A named group of related style tokens.
///
/// Categories form a closed set so that typed lookups can never name a
/// category that does not exist. String names are only accepted through
/// [`FromStr`], which fails loudly on anything unknown.
///
/// # Example
///
/// ```rust
/// use stylebook::Category;
///
/// let category: Category = "buttons".parse().unwrap();
/// assert_eq!(category, Category::Buttons);
/// assert_eq!(category.default_variant(), "primary");
/// assert!("widgets".parse::<Category>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Buttons,
    Cards,
    Layouts,
    Typography,
    Icons,
    Spacing,
    Responsive,
    Backgrounds,
    Animations,
    Sections,
    Badges,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 11] = [
        Category::Buttons,
        Category::Cards,
        Category::Layouts,
        Category::Typography,
        Category::Icons,
        Category::Spacing,
        Category::Responsive,
        Category::Backgrounds,
        Category::Animations,
        Category::Sections,
        Category::Badges,
    ];

    /// Returns the lowercase category name.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Buttons => "buttons",
            Category::Cards => "cards",
            Category::Layouts => "layouts",
            Category::Typography => "typography",
            Category::Icons => "icons",
            Category::Spacing => "spacing",
            Category::Responsive => "responsive",
            Category::Backgrounds => "backgrounds",
            Category::Animations => "animations",
            Category::Sections => "sections",
            Category::Badges => "badges",
        }
    }

    /// Returns the variant the built-in catalog falls back to for this category.
    pub fn default_variant(self) -> &'static str {
        catalog::default_variant(self)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| RegistryError::UnknownCategory {
                name: s.to_string(),
            })
    }
}
