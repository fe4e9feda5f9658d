pub const DEFAULT: &str = "neutral";

pub const NEUTRAL: &str = "inline-flex items-center rounded-full bg-gray-100 px-2.5 py-0.5 text-xs font-medium text-gray-800";
pub const PRIMARY: &str = "inline-flex items-center rounded-full bg-blue-100 px-2.5 py-0.5 text-xs font-medium text-blue-800";
pub const SUCCESS: &str = "inline-flex items-center rounded-full bg-green-100 px-2.5 py-0.5 text-xs font-medium text-green-800";
pub const WARNING: &str = "inline-flex items-center rounded-full bg-yellow-100 px-2.5 py-0.5 text-xs font-medium text-yellow-800";
pub const DANGER: &str = "inline-flex items-center rounded-full bg-red-100 px-2.5 py-0.5 text-xs font-medium text-red-800";
pub const INFO: &str = "inline-flex items-center rounded-full bg-sky-100 px-2.5 py-0.5 text-xs font-medium text-sky-800";
pub const OUTLINE: &str = "inline-flex items-center rounded-full border border-gray-300 px-2.5 py-0.5 text-xs font-medium text-gray-700";

pub const ENTRIES: &[(&str, &str)] = &[
    ("neutral", NEUTRAL),
    ("primary", PRIMARY),
    ("success", SUCCESS),
    ("warning", WARNING),
    ("danger", DANGER),
    ("info", INFO),
    ("outline", OUTLINE),
];
