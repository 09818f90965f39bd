//! **Line and word level comparison of two texts.**
//!
//! `diff-checker` aligns two texts line by line in a single greedy pass. Lines
//! that are equal are reported as the same; lines that differ but share most of
//! their words are paired as *similar* and carry a word-level alignment, so a
//! renderer can highlight exactly which words changed. Everything else is
//! reported as present only in A or only in B.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: the tokenizer, the two matchers and the shared greedy
//!   alignment routine, plus [`DiffEngine`] and [`DiffResult`].
//! - **[`reports`]**: console, summary and JSON renderers for a [`DiffResult`].
//! - **[`pipeline`]**: read → align → report stages used by the CLI.
//! - **[`config`]**: YAML configuration, presets and validation.
//! - **[`error`]**: the crate error type and context helpers.
//!
//! ## Getting Started
//!
//! ```
//! use diff_checker::diff::{align_lines, MatchKind};
//!
//! let records = align_lines("abcd\n1234\nxyz", "abcd\n5678\nxyz");
//! let kinds: Vec<_> = records.iter().filter_map(|r| r.kind()).collect();
//! assert_eq!(
//!     kinds,
//!     vec![MatchKind::Same, MatchKind::OnlyInA, MatchKind::OnlyInB, MatchKind::Same]
//! );
//! ```
//!
//! ### Rendering a Report
//!
//! ```
//! use diff_checker::{DiffEngine, ReportFormat};
//! use diff_checker::reports::{create_reporter_with_options, Palette, ReportConfig};
//!
//! let result = DiffEngine::new().diff("the quick brown fox", "the quick red fox");
//! let reporter = create_reporter_with_options(ReportFormat::Console, false, Palette::default());
//! let report = reporter.generate_diff_report(&result, &ReportConfig::default()).unwrap();
//! assert!(report.contains("L1/1 ~A/B\t:the quick brownred fox"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `diff-checker` library crate. The binary
//! compares `a.txt` and `b.txt` by default: `diff-checker diff [A] [B]`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Ratios and percentages are computed from line and token counts
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `a`/`b` or `line_a`/`line_b` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, MatchingConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, DiffConfigBuilder};
pub use diff::{align_lines, align_words, DiffEngine, DiffResult, LineMatch, MatchKind, WordMatch};
pub use error::{DiffCheckerError, ErrorContext, Result};
pub use reports::{ReportFormat, ReportGenerator};
