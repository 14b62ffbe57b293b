//! Small text helpers shared by flag parsing and settings persistence.

/// Remove one pair of surrounding double quotes.
///
/// `"\"abc\""` gives `abc`, `"\"\""` gives an empty string, anything that is
/// not fully wrapped is returned unchanged.
pub fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

/// Trim `s` and drop every whitespace character that is not inside a
/// double-quoted span. An unmatched quote is kept literally.
///
/// ```
/// use srcmake_core::domain::common::remove_unquoted_whitespace;
///
/// assert_eq!(
///     remove_unquoted_whitespace(r#"author = "Jane Doe""#),
///     r#"author="Jane Doe""#
/// );
/// ```
pub fn remove_unquoted_whitespace(s: &str) -> String {
    let s = s.trim();
    let mut out = String::with_capacity(s.len());
    let mut rest = s;

    while let Some(c) = rest.chars().next() {
        let after = &rest[c.len_utf8()..];

        if c == '"' {
            if let Some(close) = after.find('"') {
                out.push('"');
                out.push_str(&after[..=close]);
                rest = &after[close + 1..];
                continue;
            }
            out.push(c);
        } else if !c.is_whitespace() {
            out.push(c);
        }

        rest = after;
    }

    out
}
