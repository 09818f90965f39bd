//! Line-level alignment of two texts.

use super::greedy;
use super::record::LineMatch;
use super::similarity::{similarity_ratio, DEFAULT_SIMILARITY_THRESHOLD};
use super::traits::UnitMatcher;
use super::words::align_words;

/// Pairs lines that are equal, or whose word alignment is similar.
#[derive(Debug, Clone, Copy)]
pub struct LineMatcher {
    threshold: f64,
}

impl LineMatcher {
    /// Create a matcher with the given similarity threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// The similarity threshold in use.
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for LineMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

impl UnitMatcher for LineMatcher {
    type Output = LineMatch;

    fn try_match(&self, a: &str, b: &str) -> Option<LineMatch> {
        if a == b {
            return Some(LineMatch::same(a));
        }

        let words = align_words(a, b);
        let Some(ratio) = similarity_ratio(&words) else {
            tracing::trace!(a, b, "not similar: no tokens");
            return None;
        };

        if ratio > self.threshold {
            tracing::trace!(a, b, ratio, words = words.len(), "similar");
            Some(LineMatch::similar(a, b, words))
        } else {
            tracing::trace!(a, b, ratio, words = words.len(), "not similar");
            None
        }
    }

    fn only_in_a(&self, a: &str) -> LineMatch {
        LineMatch::only_in_a(a)
    }

    fn only_in_b(&self, b: &str) -> LineMatch {
        LineMatch::only_in_b(b)
    }

    fn name(&self) -> &str {
        "line"
    }
}

/// Split a text into lines on `\n`, keeping every other character.
///
/// An empty text is a single empty line.
#[must_use]
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Align two texts line by line with the default threshold.
#[must_use]
pub fn align_lines(text_a: &str, text_b: &str) -> Vec<LineMatch> {
    align_lines_with(&LineMatcher::default(), text_a, text_b)
}

/// Align two texts line by line with a specific matcher.
#[must_use]
pub fn align_lines_with(matcher: &LineMatcher, text_a: &str, text_b: &str) -> Vec<LineMatch> {
    let lines_a = split_lines(text_a);
    let lines_b = split_lines(text_b);
    greedy::align(matcher, &lines_a, &lines_b)
}
