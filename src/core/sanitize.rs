/// Escapes characters that could open markup in user-supplied text.
///
/// `<`, `>`, `"`, `'` and `/` are replaced by their HTML entities everywhere
/// they occur. `&` is passed through as-is, so escaping twice is not the same
/// as escaping once. Absent input yields an empty string.
pub fn sanitize_input<'a>(input: impl Into<Option<&'a str>>) -> String {
    let Some(input) = input.into() else {
        return String::new();
    };

    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            '/' => escaped.push_str("&#x2F;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_script_tag() {
        let input = "<script>alert(1)</script>";
        let out = sanitize_input(input);
        assert_eq!(out, "&lt;script&gt;alert(1)&lt;&#x2F;script&gt;");
        assert!(!out.contains('<') && !out.contains('>'));
        assert_ne!(out, input);
    }

    #[test]
    fn test_sanitize_quotes_and_slashes() {
        assert_eq!(
            sanitize_input(r#"say "hi" it's a/b"#),
            "say &quot;hi&quot; it&#x27;s a&#x2F;b"
        );
    }

    #[test]
    fn test_sanitize_leaves_ampersand() {
        assert_eq!(sanitize_input("Tom & Jerry"), "Tom & Jerry");
    }

    #[test]
    fn test_sanitize_empty_and_absent() {
        assert_eq!(sanitize_input(""), "");
        assert_eq!(sanitize_input(None), "");
    }

    #[test]
    fn test_sanitize_escapes_every_occurrence() {
        let out = sanitize_input("<<a>> / <<b>>");
        assert_eq!(out.matches("&lt;").count(), 4);
        assert_eq!(out.matches("&gt;").count(), 4);
        assert_eq!(out.matches("&#x2F;").count(), 1);
    }
}
