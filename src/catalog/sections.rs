//! Page section tokens.

pub const DEFAULT: &str = "content";

pub const CONTENT: &str = "relative py-16 sm:py-24";
pub const HERO: &str = "relative overflow-hidden py-20 sm:py-32";
pub const FEATURE: &str = "relative bg-gray-50 py-16 sm:py-24";
pub const CTA: &str = "relative bg-blue-600 py-16 text-white sm:py-20";
pub const TESTIMONIAL: &str = "relative bg-white py-16 sm:py-24";
pub const HEADER: &str = "sticky top-0 z-40 border-b border-gray-200 bg-white/80 backdrop-blur";
pub const FOOTER: &str = "border-t border-gray-200 bg-gray-50 py-12";

pub const ENTRIES: &[(&str, &str)] = &[
    ("content", CONTENT),
    ("hero", HERO),
    ("feature", FEATURE),
    ("cta", CTA),
    ("testimonial", TESTIMONIAL),
    ("header", HEADER),
    ("footer", FOOTER),
];
