//! Length- and case-oriented string helpers.
//!
//! Lengths are measured in Unicode scalar values (`char`s), so an emoji such
//! as 👋 counts as a single unit and is never cut in half.

use crate::core::ConfigProvider;

/// Suffix appended by [`truncate_text`] when the input is shortened.
pub const DEFAULT_SUFFIX: &str = "...";

/// Truncates `text` to at most `max_length` characters, appending `"..."`
/// when anything was cut.
///
/// See [`truncate_text_with_suffix`] for the full rules.
pub fn truncate_text<'a>(text: impl Into<Option<&'a str>>, max_length: i64) -> String {
    truncate_text_with_suffix(text, max_length, DEFAULT_SUFFIX)
}

/// Truncates `text` to at most `max_length` characters followed by `suffix`.
///
/// - Absent or empty `text`, or a `max_length` of zero or less, yields
///   `suffix` on its own.
/// - Text that already fits is returned unchanged, without the suffix.
/// - Otherwise the first `max_length` characters are kept and `suffix` is
///   appended verbatim.
///
/// Characters are Unicode scalar values, not grapheme clusters: a ZWJ emoji
/// sequence such as 👨‍👩‍👧 is several characters and may be cut between them.
pub fn truncate_text_with_suffix<'a>(
    text: impl Into<Option<&'a str>>,
    max_length: i64,
    suffix: &str,
) -> String {
    let text = text.into().unwrap_or_default();
    if text.is_empty() || max_length <= 0 {
        return suffix.to_string();
    }

    let limit = usize::try_from(max_length).unwrap_or(usize::MAX);
    // char_indices 的第 limit 個位置就是切割點；找不到代表長度不超過 limit
    match text.char_indices().nth(limit) {
        None => text.to_string(),
        Some((cut, _)) => {
            tracing::debug!(
                "Truncating text at {} chars (byte offset {})",
                limit,
                cut
            );
            let mut truncated = String::with_capacity(cut + suffix.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(suffix);
            truncated
        }
    }
}

/// Uppercases the first character when it is a lowercase letter.
///
/// `None` passes through as `None`; everything after the first character is
/// left exactly as it was.
pub fn capitalize_first_letter<'a>(text: impl Into<Option<&'a str>>) -> Option<String> {
    let text = text.into()?;
    let mut chars = text.chars();
    let capitalized = match chars.next() {
        Some(first) if first.is_lowercase() => {
            let mut out = String::with_capacity(text.len());
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    };
    Some(capitalized)
}

/// Shortens a skill description for list views using the configured
/// length and suffix.
pub fn excerpt<C: ConfigProvider + ?Sized>(description: &str, config: &C) -> String {
    truncate_text_with_suffix(
        description,
        config.truncate_max_length(),
        config.truncate_suffix(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::toml_config::TextConfig;

    #[test]
    fn test_truncate_returns_short_text_unchanged() {
        assert_eq!(truncate_text("Hello", 10), "Hello");
        assert_eq!(truncate_text("Hello", 5), "Hello");
    }

    #[test]
    fn test_truncate_appends_suffix() {
        assert_eq!(truncate_text("Hello World", 5), "Hello...");
        assert_eq!(
            truncate_text_with_suffix("Hello World", 5, " [more]"),
            "Hello [more]"
        );
    }

    #[test]
    fn test_truncate_degenerate_inputs_return_suffix() {
        assert_eq!(truncate_text("", 10), "...");
        assert_eq!(truncate_text(None, 10), "...");
        assert_eq!(truncate_text("Hello", 0), "...");
        assert_eq!(truncate_text("Hello", -3), "...");
        assert_eq!(truncate_text_with_suffix("Hello", -1, ""), "");
    }

    #[test]
    fn test_truncate_counts_emoji_as_one_char() {
        assert_eq!(truncate_text("Hello 👋 World", 7), "Hello 👋...");
        // 4 個 emoji，byte 長度遠超 4
        assert_eq!(truncate_text("👋👋👋👋", 4), "👋👋👋👋");
        assert_eq!(truncate_text("こんにちは世界", 5), "こんにちは...");
    }

    #[test]
    fn test_truncate_splits_zwj_sequences_by_scalar() {
        assert_eq!(truncate_text("👨\u{200D}👩\u{200D}👧 family", 1), "👨...");
    }

    #[test]
    fn test_truncate_output_length_is_bounded() {
        let long = "x".repeat(200);
        let inputs = ["", "a", "Hello 👋 World", "ポートフォリオ", long.as_str()];
        for input in inputs {
            for n in -2..20i64 {
                let out = truncate_text(input, n);
                assert!(out.chars().count() as i64 <= n.max(0) + 3, "{input:?} / {n}");
            }
        }
    }

    #[test]
    fn test_capitalize_first_letter() {
        assert_eq!(capitalize_first_letter("hello").as_deref(), Some("Hello"));
        assert_eq!(capitalize_first_letter("Hello").as_deref(), Some("Hello"));
        assert_eq!(capitalize_first_letter("").as_deref(), Some(""));
        assert_eq!(capitalize_first_letter(None), None);
    }

    #[test]
    fn test_capitalize_leaves_non_lowercase_start_alone() {
        for input in ["1abc", " hello", "#tag", "ÉCOLE", "日本語"] {
            assert_eq!(capitalize_first_letter(input).as_deref(), Some(input));
        }
    }

    #[test]
    fn test_capitalize_only_touches_first_char() {
        assert_eq!(
            capitalize_first_letter("hELLO wORLD").as_deref(),
            Some("HELLO wORLD")
        );
        assert_eq!(capitalize_first_letter("élan").as_deref(), Some("Élan"));
    }

    #[test]
    fn test_excerpt_uses_configured_limits() {
        let config = TextConfig::from_toml_str(
            r#"
[truncate]
max_length = 6
suffix = "…"
"#,
        )
        .unwrap();
        assert_eq!(excerpt("コンポーネント設計、Hooks", &config), "コンポーネン…");
        assert_eq!(excerpt("React", &config), "React");
    }
}
