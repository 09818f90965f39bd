//! Trait definitions for pluggable alignment predicates.
//!
//! The greedy aligner is shared by both granularities; what differs is how
//! two units are compared and what record a pairing produces.

/// Decides whether two units pair up and builds the resulting records.
pub trait UnitMatcher {
    /// Record type emitted by the aligner.
    type Output;

    /// Try to pair `a` with `b`, returning the matched record on success.
    fn try_match(&self, a: &str, b: &str) -> Option<Self::Output>;

    /// Record for a unit of A with no partner in B.
    fn only_in_a(&self, a: &str) -> Self::Output;

    /// Record for a unit of B with no partner in A.
    fn only_in_b(&self, b: &str) -> Self::Output;

    /// Name of this matcher, recorded in alignment traces.
    fn name(&self) -> &str;
}
