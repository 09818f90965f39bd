//! Similarity classification of word alignments.

use super::record::WordMatch;

/// Threshold the line aligner uses unless configured otherwise.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.5;

/// Fraction of word records that are identical on both sides.
///
/// Returns `None` for an empty alignment.
#[must_use]
pub fn similarity_ratio(matches: &[WordMatch]) -> Option<f64> {
    if matches.is_empty() {
        return None;
    }
    let same = matches.iter().filter(|m| m.is_same()).count();
    Some(same as f64 / matches.len() as f64)
}

/// Whether an alignment is similar enough to pair its two lines.
///
/// The ratio must strictly exceed `threshold`. An empty alignment is never
/// similar.
#[must_use]
pub fn is_similar(matches: &[WordMatch], threshold: f64) -> bool {
    similarity_ratio(matches).is_some_and(|ratio| ratio > threshold)
}
