//! Whitespace normalisation and line-ending conversion.

use crate::domain::value_objects::LineEnding;

/// Collapse rules, applied repeatedly until none of them matches.
const COLLAPSE: &[(&str, &str)] = &[
    ("  ", " "),
    (" \t", "\t"),
    ("\t ", "\t"),
    (" \n", "\n"),
    ("\n ", "\n"),
    ("\n\n\n", "\n\n"),
];

/// Canonicalise newlines to `\n`, trim the document, collapse redundant
/// whitespace to a fixed point and end with exactly one newline.
///
/// Blank input is returned unchanged. The result is idempotent.
pub fn normalize(content: &str) -> String {
    if content.trim().is_empty() {
        return content.to_string();
    }

    let mut text = content.replace("\r\n", "\n").replace('\r', "\n");
    text = text.trim().to_string();

    loop {
        let before = text.len();
        for &(from, to) in COLLAPSE {
            while text.contains(from) {
                text = text.replace(from, to);
            }
        }
        if text.len() == before {
            break;
        }
    }

    text.push('\n');
    text
}

/// Render every newline with `ending`. Blank input is returned unchanged.
pub fn apply_line_ending(content: &str, ending: LineEnding) -> String {
    if content.trim().is_empty() {
        return content.to_string();
    }

    match ending {
        LineEnding::Unix => content.to_string(),
        LineEnding::Windows => content.replace("\r\n", "\n").replace('\n', "\r\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_spaces_and_tabs() {
        assert_eq!(normalize("a    b"), "a b\n");
        assert_eq!(normalize("a \t b"), "a\tb\n");
        assert_eq!(normalize("x\t \t y"), "x\t\ty\n");
    }

    #[test]
    fn strips_spaces_around_newlines() {
        assert_eq!(normalize("a   \n   b"), "a\nb\n");
    }

    #[test]
    fn caps_blank_lines_at_one() {
        assert_eq!(normalize("a\n\n\n\n\n\nb"), "a\n\nb\n");
        assert_eq!(normalize("a\n \n \n \nb"), "a\n\nb\n");
    }

    #[test]
    fn trims_and_adds_single_trailing_newline() {
        assert_eq!(normalize("\n\n  body  \n\n\n"), "body\n");
    }

    #[test]
    fn canonicalises_line_endings() {
        assert_eq!(normalize("a\r\nb\rc"), "a\nb\nc\n");
    }

    #[test]
    fn blank_is_unchanged() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \n\t"), " \n\t");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "int main()\n{\n    return 0;\n}\n",
            "  a \t\t b \r\n\r\n\r\n\r\n c  ",
            "#ifndef X\n\n\n\n#define X\n \t \n#endif",
            "\ta\n\tb",
            "x",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "input: {s:?}");
        }
    }

    #[test]
    fn line_endings() {
        assert_eq!(apply_line_ending("a\nb\n", LineEnding::Windows), "a\r\nb\r\n");
        assert_eq!(apply_line_ending("a\nb\n", LineEnding::Unix), "a\nb\n");
        assert_eq!(apply_line_ending("a\r\nb\n", LineEnding::Windows), "a\r\nb\r\n");
        assert_eq!(apply_line_ending("\n", LineEnding::Windows), "\n");
    }
}
