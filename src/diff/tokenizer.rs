//! Line tokenizer for word-level alignment.
//!
//! Splits a line into alternating content and delimiter tokens. Each
//! delimiter becomes its own one-character token, and the content before it
//! is emitted even when empty. Content after the last delimiter is only
//! emitted when non-empty, so a trailing delimiter leaves no empty token
//! behind while a leading one does.

/// Characters that separate words within a line.
pub const DELIMITERS: [char; 6] = [' ', '-', '_', ',', ':', '"'];

/// Check whether `ch` is a word delimiter.
#[must_use]
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Split a line into word and delimiter tokens.
///
/// Tokens borrow from `line`; concatenating them reproduces it exactly.
#[must_use]
pub fn split_words(line: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;

    for (idx, ch) in line.char_indices() {
        if !is_delimiter(ch) {
            continue;
        }
        let end = idx + ch.len_utf8();
        tokens.push(&line[start..idx]);
        tokens.push(&line[idx..end]);
        start = end;
    }

    if start < line.len() {
        tokens.push(&line[start..]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_line() {
        assert!(split_words("").is_empty());
    }

    #[test]
    fn test_no_delimiters() {
        assert_eq!(split_words("abcd"), vec!["abcd"]);
    }

    #[test]
    fn test_every_delimiter() {
        let tokens = split_words("space dash-underscore_comma,colon:quotation\"");
        assert_eq!(
            tokens,
            vec![
                "space",
                " ",
                "dash",
                "-",
                "underscore",
                "_",
                "comma",
                ",",
                "colon",
                ":",
                "quotation",
                "\"",
            ]
        );
    }

    #[test]
    fn test_leading_delimiter_emits_empty_token() {
        assert_eq!(split_words(" a"), vec!["", " ", "a"]);
    }

    #[test]
    fn test_adjacent_delimiters_emit_empty_token() {
        assert_eq!(split_words("a, b"), vec!["a", ",", "", " ", "b"]);
    }

    #[test]
    fn test_trailing_delimiter_has_no_empty_tail() {
        assert_eq!(split_words("a-"), vec!["a", "-"]);
        assert_eq!(split_words("-"), vec!["", "-"]);
    }

    #[test]
    fn test_newline_and_tab_are_content() {
        assert_eq!(split_words("a\tb\r"), vec!["a\tb\r"]);
    }

    #[test]
    fn test_multibyte_content() {
        assert_eq!(split_words("héllo wörld"), vec!["héllo", " ", "wörld"]);
    }

    #[test]
    fn test_json_line() {
        assert_eq!(
            split_words(r#""key": "value","#),
            vec!["", "\"", "key", "\"", "", ":", "", " ", "", "\"", "value", "\"", "", ","]
        );
    }
}
