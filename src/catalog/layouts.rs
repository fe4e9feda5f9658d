//! Page and block layout tokens.

pub const DEFAULT: &str = "container";

pub const CONTAINER: &str = "mx-auto max-w-7xl px-4 sm:px-6 lg:px-8";
pub const NARROW: &str = "mx-auto max-w-3xl px-4 sm:px-6";
pub const WIDE: &str = "mx-auto max-w-screen-2xl px-4 sm:px-6 lg:px-8";
pub const GRID_2: &str = "grid grid-cols-1 gap-6 md:grid-cols-2";
pub const GRID_3: &str = "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3";
pub const GRID_4: &str = "grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-4";
pub const FLEX_CENTER: &str = "flex items-center justify-center";
pub const FLEX_BETWEEN: &str = "flex items-center justify-between";
pub const STACK: &str = "flex flex-col";
pub const SIDEBAR: &str = "grid grid-cols-1 gap-8 lg:grid-cols-[16rem_1fr]";

pub const ENTRIES: &[(&str, &str)] = &[
    ("container", CONTAINER),
    ("narrow", NARROW),
    ("wide", WIDE),
    ("grid-2", GRID_2),
    ("grid-3", GRID_3),
    ("grid-4", GRID_4),
    ("flex-center", FLEX_CENTER),
    ("flex-between", FLEX_BETWEEN),
    ("stack", STACK),
    ("sidebar", SIDEBAR),
];
