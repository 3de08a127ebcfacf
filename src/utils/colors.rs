/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const GREY: &str = "\x1b[90m";

/// Parse a `#rrggbb` palette token into RGB components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let raw = hex.trim().strip_prefix('#')?;
    if raw.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&raw[0..2], 16).ok()?;
    let g = u8::from_str_radix(&raw[2..4], 16).ok()?;
    let b = u8::from_str_radix(&raw[4..6], 16).ok()?;
    Some((r, g, b))
}

/// Strip ANSI escapes so width math works on what is actually visible.
pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}
