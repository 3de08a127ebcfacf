use crate::errors::{AppError, AppResult};
use unicode_width::UnicodeWidthStr;

/// Trim a user-supplied label and enforce the configured length limit.
/// An all-whitespace label is rejected; callers decide whether that means
/// "no-op" (create) or "retain the prior label" (rename).
pub fn normalize_label(raw: &str, max_len: usize) -> AppResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyLabel);
    }
    let got = trimmed.chars().count();
    if got > max_len {
        return Err(AppError::LabelTooLong { max: max_len, got });
    }
    Ok(trimmed.to_string())
}

/// Visible terminal width of a string (labels may contain wide glyphs).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Right-pad to `width` visible columns.
pub fn pad_to(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}
