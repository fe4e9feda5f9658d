//! Text tokens.

pub const DEFAULT: &str = "body";

pub const H1: &str = "text-4xl font-bold tracking-tight text-gray-900 sm:text-5xl";
pub const H2: &str = "text-3xl font-bold tracking-tight text-gray-900";
pub const H3: &str = "text-2xl font-semibold text-gray-900";
pub const H4: &str = "text-lg font-semibold text-gray-900";
pub const BODY: &str = "text-base leading-7 text-gray-700";
pub const LEAD: &str = "text-lg leading-8 text-gray-600";
pub const SMALL: &str = "text-sm text-gray-600";
pub const MUTED: &str = "text-sm text-gray-500";
pub const CAPTION: &str = "text-xs uppercase tracking-wide text-gray-500";
pub const LINK: &str = "font-medium text-blue-600 hover:text-blue-800 hover:underline";
pub const CODE: &str = "rounded bg-gray-100 px-1.5 py-0.5 font-mono text-sm text-gray-800";

pub const ENTRIES: &[(&str, &str)] = &[
    ("h1", H1),
    ("h2", H2),
    ("h3", H3),
    ("h4", H4),
    ("body", BODY),
    ("lead", LEAD),
    ("small", SMALL),
    ("muted", MUTED),
    ("caption", CAPTION),
    ("link", LINK),
    ("code", CODE),
];
