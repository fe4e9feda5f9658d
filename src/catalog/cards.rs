//! Card tokens.

pub const DEFAULT: &str = "base";

pub const BASE: &str = "rounded-lg border border-gray-200 bg-white p-6 shadow-sm";
pub const ELEVATED: &str = "rounded-lg bg-white p-6 shadow-lg";
pub const INTERACTIVE: &str = "rounded-lg border border-gray-200 bg-white p-6 shadow-sm transition-shadow duration-200 hover:shadow-md cursor-pointer";
pub const BORDERED: &str = "rounded-lg border-2 border-gray-300 bg-white p-6";
pub const FLAT: &str = "rounded-lg bg-gray-50 p-6";
pub const FEATURE: &str = "flex flex-col items-start rounded-xl border border-gray-100 bg-white p-8 shadow-sm";
pub const PRICING: &str = "flex flex-col rounded-2xl border border-gray-200 bg-white p-8 shadow-sm ring-1 ring-gray-900/5";

pub const ENTRIES: &[(&str, &str)] = &[
    ("base", BASE),
    ("elevated", ELEVATED),
    ("interactive", INTERACTIVE),
    ("bordered", BORDERED),
    ("flat", FLAT),
    ("feature", FEATURE),
    ("pricing", PRICING),
];
