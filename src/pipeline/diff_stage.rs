//! Diff computation stage.
//!
//! Builds the engine from the matching configuration and aligns the two inputs.

use crate::config::DiffConfig;
use crate::diff::{DiffEngine, DiffResult};
use crate::error::ErrorContext;
use anyhow::Result;

use super::InputText;

/// Run the line alignment between two inputs.
pub fn compute_diff(config: &DiffConfig, a: &InputText, b: &InputText) -> Result<DiffResult> {
    let quiet = config.behavior.quiet;
    let threshold = config.matching.similarity_threshold;

    let engine = DiffEngine::new()
        .with_similarity_threshold(threshold)
        .context("Failed to build diff engine")?;

    if !quiet {
        tracing::info!("Aligning {} and {}...", a.display_path(), b.display_path());
    }

    let result = engine.diff(&a.content, &b.content);

    if !quiet {
        let summary = &result.summary;
        tracing::info!(
            "Diff: {} same, {} similar, {} only in A, {} only in B",
            summary.lines_same,
            summary.lines_similar,
            summary.lines_only_in_a,
            summary.lines_only_in_b
        );
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::diff::MatchKind;

    #[test]
    fn test_compute_diff_uses_threshold() {
        let a = InputText::new("a.txt", "the quick brown fox");
        let b = InputText::new("b.txt", "the quick red fox");

        let default = DiffConfigBuilder::new().quiet(true).build().unwrap();
        let result = compute_diff(&default, &a, &b).unwrap();
        assert_eq!(result.records[0].kind(), Some(MatchKind::Similar));

        let strict = DiffConfigBuilder::new()
            .quiet(true)
            .similarity_threshold(0.9)
            .build()
            .unwrap();
        let result = compute_diff(&strict, &a, &b).unwrap();
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].kind(), Some(MatchKind::OnlyInA));
    }

    #[test]
    fn test_compute_diff_rejects_bad_threshold() {
        let mut config = DiffConfigBuilder::new().quiet(true).build().unwrap();
        config.matching.similarity_threshold = 3.0;
        let input = InputText::new("a.txt", "x");
        let err = compute_diff(&config, &input, &input).unwrap_err();
        assert!(err.to_string().contains("Failed to build diff engine"), "{err}");
    }
}
