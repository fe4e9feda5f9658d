//! Spacing tokens for sections, stacks and inline groups.

pub const DEFAULT: &str = "stack-md";

pub const SECTION: &str = "py-16 sm:py-24";
pub const SECTION_SM: &str = "py-8 sm:py-12";
pub const SECTION_LG: &str = "py-24 sm:py-32";
pub const STACK_SM: &str = "space-y-2";
pub const STACK_MD: &str = "space-y-4";
pub const STACK_LG: &str = "space-y-8";
pub const INLINE_SM: &str = "space-x-2";
pub const INLINE_MD: &str = "space-x-4";
pub const CARD_PADDING: &str = "p-4 sm:p-6";

pub const ENTRIES: &[(&str, &str)] = &[
    ("section", SECTION),
    ("section-sm", SECTION_SM),
    ("section-lg", SECTION_LG),
    ("stack-sm", STACK_SM),
    ("stack-md", STACK_MD),
    ("stack-lg", STACK_LG),
    ("inline-sm", INLINE_SM),
    ("inline-md", INLINE_MD),
    ("card-padding", CARD_PADDING),
];
