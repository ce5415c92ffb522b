use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Marker appended to names that do not fit their column.
pub const TRUNCATION_MARKER: &str = "..";

/// Fits `name` into `max_len` display columns. Longer names keep their first
/// `max_len - 2` columns followed by [`TRUNCATION_MARKER`].
pub fn truncate_name(name: &str, max_len: usize) -> String {
    if name.width() <= max_len {
        return name.to_string();
    }
    let budget = max_len.saturating_sub(TRUNCATION_MARKER.len());
    let mut result = String::new();
    let mut width = 0;
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > budget {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result.push_str(TRUNCATION_MARKER);
    result
}

/// Pads `s` with spaces to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(pad))
}
