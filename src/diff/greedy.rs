//! Single-pass greedy sequence alignment.
//!
//! Each unit of A is paired with the first candidate in the unconsumed
//! suffix of B. Units of B skipped on the way to that candidate are emitted
//! as only-in-B and consumed with it. A unit of A without a candidate is
//! emitted as only-in-A and leaves the suffix untouched. There is no
//! backtracking, so the result is deterministic but not a minimal edit
//! script.

use super::traits::UnitMatcher;

/// Align two unit sequences with `matcher` as the candidate predicate.
pub fn align<M, S>(matcher: &M, left: &[S], right: &[S]) -> Vec<M::Output>
where
    M: UnitMatcher + ?Sized,
    S: AsRef<str>,
{
    let mut records = Vec::with_capacity(left.len().max(right.len()));
    let mut remaining = right;

    for a in left {
        let a = a.as_ref();
        let hit = remaining
            .iter()
            .enumerate()
            .find_map(|(idx, b)| matcher.try_match(a, b.as_ref()).map(|rec| (idx, rec)));

        match hit {
            Some((idx, record)) => {
                records.extend(remaining[..idx].iter().map(|b| matcher.only_in_b(b.as_ref())));
                records.push(record);
                remaining = &remaining[idx + 1..];
            }
            None => records.push(matcher.only_in_a(a)),
        }
    }

    records.extend(remaining.iter().map(|b| matcher.only_in_b(b.as_ref())));
    tracing::trace!(
        matcher = matcher.name(),
        left = left.len(),
        right = right.len(),
        records = records.len(),
        "aligned"
    );
    records
}
