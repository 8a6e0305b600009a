//! General string helpers shared by the rewriter and the renderer.

use crate::String;

/// Check if `value` is wrapped in one matching pair of `"` or `'`.
///
/// A lone quote character is not a pair.
pub fn is_quote_wrapped(value: &str) -> bool {
    let bytes = value.as_bytes();
    if bytes.len() < 2 {
        return false;
    }
    let first = bytes[0];
    (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first
}

/// Decode a JavaScript string literal (`"..."` or `'...'`).
///
/// Returns `None` when `value` is not a single literal, i.e. it is an
/// expression that can only be evaluated at runtime. `'a' + 'b'` is
/// quote wrapped but closes its first literal early, so it is rejected.
pub fn unquote_js_string(value: &str) -> Option<String> {
    if !is_quote_wrapped(value) {
        return None;
    }

    let quote = value.as_bytes()[0] as char;
    let inner = &value[1..value.len() - 1];
    let mut result = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == quote {
            return None;
        }
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some(other) => result.push(other),
            None => result.push('\\'),
        }
    }
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_quote_wrapped() {
        assert!(is_quote_wrapped("\"foo\""));
        assert!(is_quote_wrapped("'foo'"));
        assert!(is_quote_wrapped("''"));
        assert!(!is_quote_wrapped("foo"));
        assert!(!is_quote_wrapped("\"foo'"));
        assert!(!is_quote_wrapped("\""));
        assert!(!is_quote_wrapped(""));
        assert!(!is_quote_wrapped("a + 'b'"));
    }

    #[test]
    fn test_unquote_js_string() {
        assert_eq!(unquote_js_string("'primary'").as_deref(), Some("primary"));
        assert_eq!(
            unquote_js_string(r#""{a: \"b\"}""#).as_deref(),
            Some(r#"{a: "b"}"#)
        );
        assert_eq!(unquote_js_string(r"'it\'s'").as_deref(), Some("it's"));
        assert_eq!(unquote_js_string(r#""a\nb""#).as_deref(), Some("a\nb"));
        assert_eq!(unquote_js_string("user.name"), None);
    }

    #[test]
    fn test_unquote_js_string_rejects_concatenation() {
        assert_eq!(unquote_js_string("'a' + 'b'"), None);
        assert_eq!(unquote_js_string(r#""x" + y + "z""#), None);
        assert_eq!(unquote_js_string(r#"'say "hi"'"#).as_deref(), Some(r#"say "hi""#));
    }
}
