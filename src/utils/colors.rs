/// ANSI color helper utilities for terminal output.
use ansi_term::Colour;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Parse "#rrggbb" into its components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let h = hex.trim().strip_prefix('#')?;
    if h.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&h[0..2], 16).ok()?;
    let g = u8::from_str_radix(&h[2..4], 16).ok()?;
    let b = u8::from_str_radix(&h[4..6], 16).ok()?;
    Some((r, g, b))
}

/// A true-colour block for a "#rrggbb" value; plain spaces if unparsable.
pub fn swatch(hex: &str) -> String {
    match hex_to_rgb(hex) {
        Some((r, g, b)) => Colour::RGB(r, g, b).on(Colour::RGB(r, g, b)).paint("    ").to_string(),
        None => "    ".to_string(),
    }
}

/// Priority colour: High red, Medium yellow, Low grey.
pub fn color_for_priority(p: crate::models::Priority) -> &'static str {
    match p {
        crate::models::Priority::High => RED,
        crate::models::Priority::Medium => YELLOW,
        crate::models::Priority::Low => GREY,
    }
}

/// Days-left colour: past grey, urgent red, otherwise green.
pub fn color_for_days_left(days: i64) -> &'static str {
    if days < 0 {
        GREY
    } else if days <= crate::core::derive::URGENT_WINDOW_DAYS {
        RED
    } else {
        GREEN
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
