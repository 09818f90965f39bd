//! Greedy two-level text alignment.
//!
//! Lines of two texts are aligned with a single left-to-right pass. A pair
//! of lines matches when the lines are equal or when their word-level
//! alignment is similar enough; a similar pair carries that word alignment
//! as its children.
//!
//! # Architecture
//!
//! - [`tokenizer`]: splits a line into word and delimiter tokens
//! - [`greedy`]: the shared alignment pass, driven by a
//!   [`UnitMatcher`](traits::UnitMatcher)
//! - [`words`] / [`lines`]: the two matchers and their entry points
//! - [`similarity`]: the ratio test that decides whether lines are similar
//!
//! The alignment is deliberately not a minimal edit script. Once a unit of
//! B is consumed it is never revisited, so crossed lines show up as one
//! match plus insertions and deletions.
//!
//! # Example
//!
//! ```
//! use diff_checker::diff::{align_lines, MatchKind};
//!
//! let records = align_lines("abcd\n1234", "1234\nxyz");
//! let kinds: Vec<_> = records.iter().map(|r| r.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![Some(MatchKind::OnlyInA), Some(MatchKind::Same), Some(MatchKind::OnlyInB)]
//! );
//! ```

mod engine;
pub mod greedy;
pub mod lines;
mod record;
mod result;
pub mod similarity;
pub mod tokenizer;
pub mod traits;
pub mod words;

pub use engine::DiffEngine;
pub use lines::{align_lines, align_lines_with, split_lines, LineMatcher};
pub use record::{LineMatch, MatchKind, TextPair, WordMatch};
pub use result::{DiffResult, DiffSummary, NumberedLine, NumberedLines};
pub use similarity::{is_similar, similarity_ratio, DEFAULT_SIMILARITY_THRESHOLD};
pub use tokenizer::{is_delimiter, split_words, DELIMITERS};
pub use traits::UnitMatcher;
pub use words::{align_words, WordMatcher};
