//! Transition and animation tokens.

pub const DEFAULT: &str = "transition";

pub const TRANSITION: &str = "transition-all duration-200 ease-in-out";
pub const FADE_IN: &str = "animate-fade-in";
pub const SLIDE_UP: &str = "animate-slide-up";
pub const PULSE: &str = "animate-pulse";
pub const SPIN: &str = "animate-spin";
pub const BOUNCE: &str = "animate-bounce";
pub const HOVER_LIFT: &str = "transition-transform duration-200 hover:-translate-y-1";
pub const HOVER_SCALE: &str = "transition-transform duration-200 hover:scale-105";

pub const ENTRIES: &[(&str, &str)] = &[
    ("transition", TRANSITION),
    ("fade-in", FADE_IN),
    ("slide-up", SLIDE_UP),
    ("pulse", PULSE),
    ("spin", SPIN),
    ("bounce", BOUNCE),
    ("hover-lift", HOVER_LIFT),
    ("hover-scale", HOVER_SCALE),
];
