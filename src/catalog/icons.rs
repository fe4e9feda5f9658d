pub const DEFAULT: &str = "md";

pub const XS: &str = "h-3 w-3";
pub const SM: &str = "h-4 w-4";
pub const MD: &str = "h-5 w-5";
pub const LG: &str = "h-6 w-6";
pub const XL: &str = "h-8 w-8";
pub const BUTTON: &str = "-ml-0.5 mr-2 h-4 w-4";
pub const CIRCLE: &str = "flex h-10 w-10 items-center justify-center rounded-full bg-blue-100 text-blue-600";

pub const ENTRIES: &[(&str, &str)] = &[
    ("xs", XS),
    ("sm", SM),
    ("md", MD),
    ("lg", LG),
    ("xl", XL),
    ("button", BUTTON),
    ("circle", CIRCLE),
];
