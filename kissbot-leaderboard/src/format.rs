//! Small text helpers shared by embed rendering.

/// Placeholder for values that must not render as nothing
pub const ZERO_WIDTH_SPACE: &str = "\u{200B}";

/// Discord embed size limits, in characters
pub mod limits {
    pub const TITLE: usize = 256;
    pub const DESCRIPTION: usize = 4096;
    pub const FIELD_NAME: usize = 256;
    pub const FIELD_VALUE: usize = 1024;
}

/// Cut `text` to at most `max_len` characters, ending with `…` when cut
pub fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
    truncated.push('…');
    truncated
}

pub fn if_empty_zero_width_space(text: String) -> String {
    if text.is_empty() {
        ZERO_WIDTH_SPACE.to_string()
    } else {
        text
    }
}
