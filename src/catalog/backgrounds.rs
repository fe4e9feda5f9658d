//! Surface and background tokens.

pub const DEFAULT: &str = "base";

pub const BASE: &str = "bg-white";
pub const MUTED: &str = "bg-gray-50";
pub const PRIMARY: &str = "bg-blue-600 text-white";
pub const DARK: &str = "bg-gray-900 text-white";
pub const GRADIENT_PRIMARY: &str = "bg-gradient-to-r from-blue-600 to-indigo-600 text-white";
pub const GRADIENT_SUBTLE: &str = "bg-gradient-to-b from-white to-gray-50";
pub const HERO: &str = "bg-gradient-to-br from-blue-50 via-white to-indigo-50";
pub const GLASS: &str = "bg-white/70 backdrop-blur-md";

pub const ENTRIES: &[(&str, &str)] = &[
    ("base", BASE),
    ("muted", MUTED),
    ("primary", PRIMARY),
    ("dark", DARK),
    ("gradient-primary", GRADIENT_PRIMARY),
    ("gradient-subtle", GRADIENT_SUBTLE),
    ("hero", HERO),
    ("glass", GLASS),
];
