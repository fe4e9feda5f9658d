//! Breakpoint-dependent tokens.

pub const DEFAULT: &str = "text";

pub const HIDE_MOBILE: &str = "hidden md:block";
pub const SHOW_MOBILE: &str = "block md:hidden";
pub const TEXT: &str = "text-sm sm:text-base lg:text-lg";
pub const HEADING: &str = "text-2xl sm:text-3xl lg:text-4xl";
pub const PADDING: &str = "px-4 py-6 sm:px-6 sm:py-8 lg:px-8 lg:py-12";
pub const GRID: &str = "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4";
pub const FLEX_DIRECTION: &str = "flex flex-col md:flex-row";
pub const FULL_WIDTH_MOBILE: &str = "w-full sm:w-auto";

pub const ENTRIES: &[(&str, &str)] = &[
    ("hide-mobile", HIDE_MOBILE),
    ("show-mobile", SHOW_MOBILE),
    ("text", TEXT),
    ("heading", HEADING),
    ("padding", PADDING),
    ("grid", GRID),
    ("flex-direction", FLEX_DIRECTION),
    ("full-width-mobile", FULL_WIDTH_MOBILE),
];
