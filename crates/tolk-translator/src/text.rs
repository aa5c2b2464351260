/// Number of characters as counted against the input limit
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` to at most `max` characters, never splitting a code point
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Trimmed and length-capped text, ready for a request body
pub fn prepare_input(text: &str, max: usize) -> &str {
    truncate_chars(text.trim(), max)
}
