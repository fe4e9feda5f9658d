//! Button tokens.

pub const DEFAULT: &str = "primary";

pub const PRIMARY: &str = "inline-flex items-center justify-center rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white shadow-sm transition-colors hover:bg-blue-700 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const SECONDARY: &str = "inline-flex items-center justify-center rounded-md bg-gray-100 px-4 py-2 text-sm font-medium text-gray-900 transition-colors hover:bg-gray-200 focus:outline-none focus:ring-2 focus:ring-gray-400 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const OUTLINE: &str = "inline-flex items-center justify-center rounded-md border border-gray-300 bg-transparent px-4 py-2 text-sm font-medium text-gray-700 transition-colors hover:bg-gray-50 focus:outline-none focus:ring-2 focus:ring-blue-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const GHOST: &str = "inline-flex items-center justify-center rounded-md bg-transparent px-4 py-2 text-sm font-medium text-gray-700 transition-colors hover:bg-gray-100 focus:outline-none focus:ring-2 focus:ring-gray-400 disabled:cursor-not-allowed disabled:opacity-50";
pub const DANGER: &str = "inline-flex items-center justify-center rounded-md bg-red-600 px-4 py-2 text-sm font-medium text-white shadow-sm transition-colors hover:bg-red-700 focus:outline-none focus:ring-2 focus:ring-red-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const SUCCESS: &str = "inline-flex items-center justify-center rounded-md bg-green-600 px-4 py-2 text-sm font-medium text-white shadow-sm transition-colors hover:bg-green-700 focus:outline-none focus:ring-2 focus:ring-green-500 focus:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";
pub const LINK: &str = "inline-flex items-center text-sm font-medium text-blue-600 underline-offset-4 hover:text-blue-800 hover:underline";
pub const ICON: &str = "inline-flex h-9 w-9 items-center justify-center rounded-full text-gray-600 transition-colors hover:bg-gray-100 hover:text-gray-900";
pub const SMALL: &str = "inline-flex items-center justify-center rounded px-2.5 py-1.5 text-xs font-medium";
pub const LARGE: &str = "inline-flex items-center justify-center rounded-lg px-6 py-3 text-base font-semibold";

pub const ENTRIES: &[(&str, &str)] = &[
    ("primary", PRIMARY),
    ("secondary", SECONDARY),
    ("outline", OUTLINE),
    ("ghost", GHOST),
    ("danger", DANGER),
    ("success", SUCCESS),
    ("link", LINK),
    ("icon", ICON),
    ("small", SMALL),
    ("large", LARGE),
];
