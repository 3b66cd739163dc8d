use unicode_segmentation::UnicodeSegmentation;

/// Normalize free text for hashing and comparison
///
/// Steps, in order:
/// 1. Lowercase
/// 2. Split on whitespace, dropping empty tokens
/// 3. Rejoin with single spaces
/// 4. Strip every character that is not a letter, digit or whitespace
///
/// Collapsing runs before stripping, so `"full - stack"` becomes
/// `"full  stack"` (two spaces) while `"full-stack"` becomes `"fullstack"`.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect()
}

/// First `max_graphemes` user-perceived characters of `text`
///
/// Counts extended grapheme clusters, so a letter followed by a combining
/// accent is one unit and is never split.
pub fn truncate_graphemes(text: &str, max_graphemes: usize) -> &str {
    match text.grapheme_indices(true).nth(max_graphemes) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
