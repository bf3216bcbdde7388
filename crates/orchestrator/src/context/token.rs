//! Token estimation utilities.
//!
//! Uses a character-based heuristic: ~4 characters per token. Budgets are
//! configured in tokens and enforced in characters.

/// Characters per token.
pub const CHARS_PER_TOKEN: usize = 4;

/// Length of `text` in characters.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Estimate the token count for a string. Rounds up.
pub fn estimate_tokens(text: &str) -> usize {
    char_len(text).div_ceil(CHARS_PER_TOKEN)
}

/// Convert a token budget to a character ceiling.
pub fn tokens_to_chars(tokens: usize) -> usize {
    tokens.saturating_mul(CHARS_PER_TOKEN)
}

/// The first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
