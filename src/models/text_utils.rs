//! Text processing utilities for post content.

/// Number of characters of post content shown on a card.
pub const EXCERPT_CHARS: usize = 100;

/// Marker appended to every excerpt.
pub const ELLIPSIS: &str = "...";

/// Shorten post content for a card: the first `max_chars` characters
/// followed by [`ELLIPSIS`].
///
/// Counts Unicode scalar values, never bytes, so a multi-byte character is
/// never split. The marker is appended whatever the length, so short
/// content keeps every character and still ends in `...`.
pub fn truncate_excerpt(content: &str, max_chars: usize) -> String {
    let cut = content
        .char_indices()
        .nth(max_chars)
        .map_or(content.len(), |(index, _)| index);
    format!("{}{}", &content[..cut], ELLIPSIS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_content_is_cut_at_limit() {
        let content = "a".repeat(150);
        let excerpt = truncate_excerpt(&content, EXCERPT_CHARS);
        assert_eq!(excerpt, format!("{}...", "a".repeat(100)));
    }

    #[test]
    fn test_exactly_limit_keeps_all_chars_and_marker() {
        let content = "b".repeat(100);
        assert_eq!(
            truncate_excerpt(&content, EXCERPT_CHARS),
            format!("{}...", content)
        );
    }

    #[test]
    fn test_one_over_limit_drops_one_char() {
        let content = format!("{}Z", "c".repeat(100));
        let excerpt = truncate_excerpt(&content, EXCERPT_CHARS);
        assert_eq!(excerpt, format!("{}...", "c".repeat(100)));
        assert!(!excerpt.contains('Z'));
    }

    #[test]
    fn test_short_content_gets_marker() {
        assert_eq!(truncate_excerpt("short", EXCERPT_CHARS), "short...");
    }

    #[test]
    fn test_empty_content_is_just_marker() {
        assert_eq!(truncate_excerpt("", EXCERPT_CHARS), ELLIPSIS);
    }

    #[test]
    fn test_multibyte_characters_counted_once() {
        let content = "é".repeat(101);
        let excerpt = truncate_excerpt(&content, EXCERPT_CHARS);
        assert_eq!(excerpt.chars().count(), 103);
        assert!(excerpt.starts_with(&"é".repeat(100)));
        assert!(excerpt.ends_with("..."));
    }

    #[test]
    fn test_whitespace_is_preserved_inside_excerpt() {
        let content = format!("line one\n  line two{}", "x".repeat(120));
        let excerpt = truncate_excerpt(&content, 20);
        assert_eq!(excerpt, "line one\n  line twox...");
    }
}
