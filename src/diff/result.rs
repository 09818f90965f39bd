//! Diff result structures.

use super::record::{LineMatch, MatchKind};
use serde::{Deserialize, Serialize};

/// Complete result of aligning two texts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[must_use]
pub struct DiffResult {
    /// Summary statistics
    pub summary: DiffSummary,
    /// Line records in alignment order
    pub records: Vec<LineMatch>,
    /// Similarity threshold the records were produced with
    pub threshold: f64,
}

impl DiffResult {
    /// Build a result from aligned records.
    pub fn new(records: Vec<LineMatch>, threshold: f64) -> Self {
        let mut result = Self {
            summary: DiffSummary::default(),
            records,
            threshold,
        };
        result.calculate_summary();
        result
    }

    /// Record how many lines each input had.
    ///
    /// An empty line left unpaired on one side yields a `("", "")` record
    /// that reads as Same. Comparing the lines the records cover with the
    /// real line counts exposes those records so they still count as a
    /// difference.
    pub fn with_input_lines(mut self, lines_a: usize, lines_b: usize) -> Self {
        let covered = self.summary.lines_in_a + self.summary.lines_in_b;
        self.summary.unpaired_empty_lines = covered.saturating_sub(lines_a + lines_b);
        self
    }

    /// Calculate and update summary statistics
    pub fn calculate_summary(&mut self) {
        let mut summary = DiffSummary {
            unpaired_empty_lines: self.summary.unpaired_empty_lines,
            ..DiffSummary::default()
        };
        for record in &self.records {
            match record.kind() {
                Some(MatchKind::Same) => {
                    summary.lines_same += 1;
                    summary.lines_in_a += 1;
                    summary.lines_in_b += 1;
                }
                Some(MatchKind::Similar) => {
                    summary.lines_similar += 1;
                    summary.lines_in_a += 1;
                    summary.lines_in_b += 1;
                }
                Some(MatchKind::OnlyInA) => {
                    summary.lines_only_in_a += 1;
                    summary.lines_in_a += 1;
                }
                Some(MatchKind::OnlyInB) => {
                    summary.lines_only_in_b += 1;
                    summary.lines_in_b += 1;
                }
                None => summary.unclassified += 1,
            }
        }
        summary.total_changes =
            summary.lines_similar + summary.lines_only_in_a + summary.lines_only_in_b;
        self.summary = summary;
    }

    /// Check if there are any changes
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes > 0
            || self.summary.unclassified > 0
            || self.summary.unpaired_empty_lines > 0
    }

    /// Percentage of records that are identical on both sides.
    #[must_use]
    pub fn similarity_score(&self) -> f64 {
        if self.records.is_empty() {
            return 100.0;
        }
        self.summary.lines_same as f64 / self.records.len() as f64 * 100.0
    }

    /// Iterate records with their running line numbers.
    pub fn numbered(&self) -> NumberedLines<'_> {
        NumberedLines::new(&self.records)
    }
}

/// Summary statistics for a diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSummary {
    pub lines_same: usize,
    pub lines_similar: usize,
    pub lines_only_in_a: usize,
    pub lines_only_in_b: usize,
    /// Similar plus one-sided lines
    pub total_changes: usize,
    /// Lines of input A covered by the records
    pub lines_in_a: usize,
    /// Lines of input B covered by the records
    pub lines_in_b: usize,
    /// Records matching no classification
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unclassified: usize,
    /// Empty lines of one input with no partner in the other
    #[serde(default, skip_serializing_if = "is_zero")]
    pub unpaired_empty_lines: usize,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_zero(n: &usize) -> bool {
    *n == 0
}

/// A record together with the line numbers it occupies on each side.
#[derive(Debug, Clone, Copy)]
pub struct NumberedLine<'a> {
    /// 1-based line in A, if the record consumes a line of A
    pub line_a: Option<usize>,
    /// 1-based line in B, if the record consumes a line of B
    pub line_b: Option<usize>,
    /// Classification of the record
    pub kind: Option<MatchKind>,
    pub record: &'a LineMatch,
}

/// Iterator keeping one running counter per input.
///
/// Same and similar records advance both counters, one-sided records
/// advance only their own side.
#[derive(Debug, Clone)]
pub struct NumberedLines<'a> {
    records: std::slice::Iter<'a, LineMatch>,
    line_a: usize,
    line_b: usize,
}

impl<'a> NumberedLines<'a> {
    #[must_use]
    pub fn new(records: &'a [LineMatch]) -> Self {
        Self {
            records: records.iter(),
            line_a: 0,
            line_b: 0,
        }
    }
}

impl<'a> Iterator for NumberedLines<'a> {
    type Item = NumberedLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        let kind = record.kind();
        let (advance_a, advance_b) = match kind {
            Some(MatchKind::Same | MatchKind::Similar) => (true, true),
            Some(MatchKind::OnlyInA) => (true, false),
            Some(MatchKind::OnlyInB) => (false, true),
            None => (false, false),
        };
        if advance_a {
            self.line_a += 1;
        }
        if advance_b {
            self.line_b += 1;
        }
        Some(NumberedLine {
            line_a: advance_a.then_some(self.line_a),
            line_b: advance_b.then_some(self.line_b),
            kind,
            record,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::record::TextPair;

    fn sample() -> DiffResult {
        DiffResult::new(
            vec![
                LineMatch::same("abcd"),
                LineMatch::only_in_a("1234"),
                LineMatch::only_in_b("5678"),
                LineMatch::similar("a b", "a c", vec![TextPair::same("a")]),
                LineMatch::same("xyz"),
            ],
            0.5,
        )
    }

    #[test]
    fn test_summary_counts() {
        let result = sample();
        assert_eq!(result.summary.lines_same, 2);
        assert_eq!(result.summary.lines_similar, 1);
        assert_eq!(result.summary.lines_only_in_a, 1);
        assert_eq!(result.summary.lines_only_in_b, 1);
        assert_eq!(result.summary.total_changes, 3);
        assert_eq!(result.summary.lines_in_a, 4);
        assert_eq!(result.summary.lines_in_b, 4);
        assert!(result.has_changes());
    }

    #[test]
    fn test_numbered_counters() {
        let result = sample();
        let numbers: Vec<_> = result
            .numbered()
            .map(|line| (line.line_a, line.line_b))
            .collect();
        assert_eq!(
            numbers,
            vec![
                (Some(1), Some(1)),
                (Some(2), None),
                (None, Some(2)),
                (Some(3), Some(3)),
                (Some(4), Some(4)),
            ]
        );
    }

    #[test]
    fn test_no_changes() {
        let result = DiffResult::new(vec![LineMatch::same("a"), LineMatch::same("")], 0.5);
        assert!(!result.has_changes());
        assert!((result.similarity_score() - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unpaired_empty_line_counts_as_change() {
        // "x\n" against "x": the trailing empty line of A has no partner.
        let records = vec![LineMatch::same("x"), LineMatch::only_in_a("")];
        let result = DiffResult::new(records, 0.5).with_input_lines(2, 1);
        assert_eq!(result.summary.lines_same, 2);
        assert_eq!(result.summary.unpaired_empty_lines, 1);
        assert!(result.has_changes());
    }

    #[test]
    fn test_paired_lines_leave_no_unpaired_count() {
        let result = DiffResult::new(vec![LineMatch::same("x"), LineMatch::same("")], 0.5)
            .with_input_lines(2, 2);
        assert_eq!(result.summary.unpaired_empty_lines, 0);
        assert!(!result.has_changes());
    }

    #[test]
    fn test_unclassified_counts_as_change() {
        let result = DiffResult::new(vec![LineMatch::Leaf(TextPair::new("x", "y"))], 0.5);
        assert_eq!(result.summary.unclassified, 1);
        assert!(result.has_changes());
        let line = result.numbered().next().unwrap();
        assert_eq!((line.line_a, line.line_b), (None, None));
    }
}
