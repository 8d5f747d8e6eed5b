//! Input filter dropping keystrokes that introduce pictographs.
//!
//! Multi-codepoint emoji skew character counts and byte-level comparisons on
//! the server, so they never make it into a field value.

use std::sync::LazyLock;

use regex::Regex;

// Emoji-presentation characters, text-default pictographs forced to emoji
// presentation with VS16 or joined by ZWJ, flag halves, skin-tone modifiers
// and keycaps.
static PICTOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\p{Emoji_Presentation}",
        r"|\p{Extended_Pictographic}\x{FE0F}",
        r"|\p{Extended_Pictographic}\x{200D}",
        r"|\x{200D}\p{Extended_Pictographic}",
        r"|\p{Regional_Indicator}",
        r"|\p{Emoji_Modifier}",
        r"|[#*0-9]\x{FE0F}?\x{20E3}",
    ))
    .expect("Invalid pictograph pattern")
});

/// Returns `true` if the text contains an emoji or pictograph sequence.
pub fn contains_pictograph(text: &str) -> bool {
    PICTOGRAPH.is_match(text)
}

/// Filters a candidate field value at the point of input.
///
/// Returns `candidate` when it is free of pictographs, otherwise the
/// previously accepted value, discarding the keystroke.
pub fn sanitize_against_pictographs<'a>(previous: &'a str, candidate: &'a str) -> &'a str {
    if contains_pictograph(candidate) {
        previous
    } else {
        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes() {
        assert!(!contains_pictograph("abcdefg1"));
        assert!(!contains_pictograph("Olá, João! Ação #1 * 2"));
        assert!(!contains_pictograph("пароль密码"));
        assert!(!contains_pictograph("© ® ™"));
        assert!(!contains_pictograph(""));
    }

    #[test]
    fn test_pictographs_detected() {
        assert!(contains_pictograph("abc😀"));
        assert!(contains_pictograph("⌚"));
        assert!(contains_pictograph("I ❤\u{FE0F} you"));
        assert!(contains_pictograph("🇧🇷"));
        assert!(contains_pictograph("👍🏽"));
        assert!(contains_pictograph("👩\u{200D}💻"));
        assert!(contains_pictograph("🏳\u{FE0F}\u{200D}🌈"));
        assert!(contains_pictograph("1\u{FE0F}\u{20E3}"));
        assert!(contains_pictograph("#\u{20E3}"));
    }

    #[test]
    fn test_text_default_zwj_sequences_detected() {
        assert!(contains_pictograph("👁\u{200D}🗨"));
        assert!(contains_pictograph("abc🕵\u{200D}♂"));
        assert!(contains_pictograph("❤\u{200D}🔥"));
        assert!(!contains_pictograph("👁"));
        assert!(!contains_pictograph("a\u{200D}b"));
        assert_eq!(sanitize_against_pictographs("abc", "abc👁\u{200D}🗨"), "abc");
    }

    #[test]
    fn test_rejection_keeps_previous() {
        assert_eq!(sanitize_against_pictographs("secret", "secret🔥"), "secret");
        assert_eq!(sanitize_against_pictographs("secret", "secret1"), "secret1");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for accepted in ["", "abcdefg1", "Ana Maria", "ação-123"] {
            let once = sanitize_against_pictographs("", accepted);
            assert_eq!(sanitize_against_pictographs(once, once), once);
            assert_eq!(once, accepted);
        }
    }
}
