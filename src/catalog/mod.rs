//! The authored token catalog.
//!
//! Each submodule holds one category: a `pub const` per variant with the
//! literal class string, a `DEFAULT` naming the fallback variant, and an
//! `ENTRIES` table listing `(variant, token)` pairs in authoring order.
//!
//! Components that know the exact variant they want can use the constants
//! directly:
//!
//! ```rust
//! use stylebook::catalog::buttons;
//!
//! let class = buttons::PRIMARY;
//! assert!(class.contains("bg-blue-600"));
//! ```
//!
//! Adding a token means adding a constant and a row to the submodule's
//! `ENTRIES`. The built-in [`Registry`](crate::Registry) is assembled from
//! these tables on first use.

pub mod animations;
pub mod backgrounds;
pub mod badges;
pub mod buttons;
pub mod cards;
pub mod icons;
pub mod layouts;
pub mod responsive;
pub mod sections;
pub mod spacing;
pub mod typography;

use crate::category::Category;

/// Returns the authored `(variant, token)` table for a category.
pub fn entries(category: Category) -> &'static [(&'static str, &'static str)] {
    match category {
        Category::Buttons => buttons::ENTRIES,
        Category::Cards => cards::ENTRIES,
        Category::Layouts => layouts::ENTRIES,
        Category::Typography => typography::ENTRIES,
        Category::Icons => icons::ENTRIES,
        Category::Spacing => spacing::ENTRIES,
        Category::Responsive => responsive::ENTRIES,
        Category::Backgrounds => backgrounds::ENTRIES,
        Category::Animations => animations::ENTRIES,
        Category::Sections => sections::ENTRIES,
        Category::Badges => badges::ENTRIES,
    }
}

/// Returns the authored default variant for a category.
pub fn default_variant(category: Category) -> &'static str {
    match category {
        Category::Buttons => buttons::DEFAULT,
        Category::Cards => cards::DEFAULT,
        Category::Layouts => layouts::DEFAULT,
        Category::Typography => typography::DEFAULT,
        Category::Icons => icons::DEFAULT,
        Category::Spacing => spacing::DEFAULT,
        Category::Responsive => responsive::DEFAULT,
        Category::Backgrounds => backgrounds::DEFAULT,
        Category::Animations => animations::DEFAULT,
        Category::Sections => sections::DEFAULT,
        Category::Badges => badges::DEFAULT,
    }
}
