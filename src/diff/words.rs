//! Word-level alignment of two lines.

use super::greedy;
use super::record::{TextPair, WordMatch};
use super::tokenizer::split_words;
use super::traits::UnitMatcher;

/// Pairs tokens by exact string equality.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordMatcher;

impl UnitMatcher for WordMatcher {
    type Output = WordMatch;

    fn try_match(&self, a: &str, b: &str) -> Option<WordMatch> {
        (a == b).then(|| TextPair::same(a))
    }

    fn only_in_a(&self, a: &str) -> WordMatch {
        TextPair::only_in_a(a)
    }

    fn only_in_b(&self, b: &str) -> WordMatch {
        TextPair::only_in_b(b)
    }

    fn name(&self) -> &str {
        "word"
    }
}

/// Align the tokens of two lines.
///
/// Both lines are tokenized once; the result covers every token of both.
#[must_use]
pub fn align_words(line_a: &str, line_b: &str) -> Vec<WordMatch> {
    let tokens_a = split_words(line_a);
    let tokens_b = split_words(line_b);
    greedy::align(&WordMatcher, &tokens_a, &tokens_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_lines() {
        let words = align_words("a b", "a b");
        assert_eq!(
            words,
            vec![TextPair::same("a"), TextPair::same(" "), TextPair::same("b")]
        );
    }

    #[test]
    fn test_single_word_change() {
        let words = align_words("hello world", "hello there");
        assert_eq!(
            words,
            vec![
                TextPair::same("hello"),
                TextPair::same(" "),
                TextPair::only_in_a("world"),
                TextPair::only_in_b("there"),
            ]
        );
    }

    #[test]
    fn test_inserted_word() {
        let words = align_words("a c", "a b c");
        assert_eq!(
            words,
            vec![
                TextPair::same("a"),
                TextPair::same(" "),
                TextPair::only_in_b("b"),
                TextPair::only_in_b(" "),
                TextPair::same("c"),
            ]
        );
    }

    #[test]
    fn test_empty_against_word() {
        assert_eq!(align_words("", "x"), vec![TextPair::only_in_b("x")]);
        assert_eq!(align_words("x", ""), vec![TextPair::only_in_a("x")]);
        assert!(align_words("", "").is_empty());
    }

    #[test]
    fn test_unmatched_empty_token_reads_as_same() {
        // The leading empty token of A finds no partner and becomes ("", "").
        let words = align_words("-a", "a");
        assert_eq!(
            words,
            vec![
                TextPair::same(""),
                TextPair::only_in_a("-"),
                TextPair::same("a"),
            ]
        );
    }

    #[test]
    fn test_repeatable() {
        let first = align_words("x-y z", "x_y z");
        let second = align_words("x-y z", "x_y z");
        assert_eq!(first, second);
    }
}
