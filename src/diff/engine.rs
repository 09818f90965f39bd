//! Diff engine entry point.

use super::lines::{align_lines_with, split_lines, LineMatcher};
use super::result::DiffResult;
use super::similarity::DEFAULT_SIMILARITY_THRESHOLD;
use crate::error::{DiffCheckerError, MatchingErrorKind, Result};

/// Aligns two texts and summarizes the outcome.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct DiffEngine {
    matcher: LineMatcher,
}

impl DiffEngine {
    /// Create an engine with the default similarity threshold.
    pub fn new() -> Self {
        Self {
            matcher: LineMatcher::new(DEFAULT_SIMILARITY_THRESHOLD),
        }
    }

    /// Use a custom similarity threshold.
    ///
    /// The threshold must lie within `0.0..=1.0`.
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&threshold) {
            return Err(DiffCheckerError::matching(
                "configuring diff engine",
                MatchingErrorKind::InvalidThreshold(threshold),
            ));
        }
        self.matcher = LineMatcher::new(threshold);
        Ok(self)
    }

    /// The similarity threshold in use.
    #[must_use]
    pub const fn similarity_threshold(&self) -> f64 {
        self.matcher.threshold()
    }

    /// Align `text_a` against `text_b`.
    pub fn diff(&self, text_a: &str, text_b: &str) -> DiffResult {
        let records = align_lines_with(&self.matcher, text_a, text_b);
        let result = DiffResult::new(records, self.matcher.threshold()).with_input_lines(
            split_lines(text_a).len(),
            split_lines(text_b).len(),
        );

        tracing::debug!(
            same = result.summary.lines_same,
            similar = result.summary.lines_similar,
            only_in_a = result.summary.lines_only_in_a,
            only_in_b = result.summary.lines_only_in_b,
            "diff complete"
        );

        result
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_threshold() {
        assert!((DiffEngine::new().similarity_threshold() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rejects_out_of_range_threshold() {
        assert!(DiffEngine::new().with_similarity_threshold(1.5).is_err());
        assert!(DiffEngine::new().with_similarity_threshold(-0.1).is_err());
        assert!(DiffEngine::new().with_similarity_threshold(f64::NAN).is_err());
        assert!(DiffEngine::new().with_similarity_threshold(0.0).is_ok());
        assert!(DiffEngine::new().with_similarity_threshold(1.0).is_ok());
    }

    #[test]
    fn test_diff_summary() {
        let result = DiffEngine::new().diff("abcd\n1234\nxyz", "abcd\n5678\nxyz");
        assert_eq!(result.records.len(), 4);
        assert_eq!(result.summary.lines_same, 2);
        assert_eq!(result.summary.total_changes, 2);
        assert!(result.has_changes());
    }

    #[test]
    fn test_unpaired_trailing_newline_is_a_change() {
        let result = DiffEngine::new().diff("x\n", "x");
        assert_eq!(result.records.len(), 2);
        assert!(result.records.iter().all(|r| r.is_same()));
        assert_eq!(result.summary.unpaired_empty_lines, 1);
        assert!(result.has_changes());

        let mirrored = DiffEngine::new().diff("x", "x\n");
        assert!(mirrored.has_changes());
    }

    #[test]
    fn test_threshold_recorded_on_result() {
        let engine = DiffEngine::new().with_similarity_threshold(0.25).unwrap();
        let result = engine.diff("a", "a");
        assert!((result.threshold - 0.25).abs() < f64::EPSILON);
        assert!(!result.has_changes());
    }
}
