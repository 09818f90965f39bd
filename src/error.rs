//! Unified error types for diff-checker.
//!
//! The alignment itself is total over any two texts. Errors come from the
//! layers around it: reading inputs and configuring the engine.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diff-checker operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffCheckerError {
    /// An input text could not be read
    #[error("Failed to read input {path:?}: {message}")]
    Input {
        path: PathBuf,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Errors configuring the matcher
    #[error("Matching configuration failed: {context}")]
    Matching {
        context: String,
        #[source]
        source: MatchingErrorKind,
    },
}

/// Specific matching error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatchingErrorKind {
    #[error("Invalid threshold value: {0} (must be 0.0-1.0)")]
    InvalidThreshold(f64),
}

/// Convenient Result type for diff-checker operations
pub type Result<T> = std::result::Result<T, DiffCheckerError>;

impl DiffCheckerError {
    /// Create an input error for a file that could not be read
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Input {
            path: path.into(),
            message: source.to_string(),
            source,
        }
    }

    /// Create a matching error with context
    pub fn matching(context: impl Into<String>, source: MatchingErrorKind) -> Self {
        Self::Matching {
            context: context.into(),
            source,
        }
    }
}

/// Extension trait for adding context to errors.
///
/// Context chains outward: `"outer: inner"`.
///
/// ```
/// use diff_checker::error::{ErrorContext, Result};
/// use diff_checker::DiffEngine;
///
/// fn engine(threshold: f64) -> Result<DiffEngine> {
///     DiffEngine::new()
///         .with_similarity_threshold(threshold)
///         .with_context(|| format!("threshold {threshold}"))
/// }
///
/// let err = engine(1.5).unwrap_err();
/// assert!(err.to_string().contains("threshold 1.5"));
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<DiffCheckerError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

fn add_context_to_error(err: DiffCheckerError, new_ctx: &str) -> DiffCheckerError {
    match err {
        DiffCheckerError::Input {
            path,
            message,
            source,
        } => DiffCheckerError::Input {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        DiffCheckerError::Matching {
            context: existing,
            source,
        } => DiffCheckerError::Matching {
            context: chain_context(new_ctx, &existing),
            source,
        },
    }
}

fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_mentions_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DiffCheckerError::input("/path/to/a.txt", io_err);
        let display = err.to_string();
        assert!(display.contains("/path/to/a.txt"), "{display}");
        assert!(display.contains("file not found"), "{display}");
    }

    #[test]
    fn test_invalid_threshold_display() {
        let err = DiffCheckerError::matching("engine", MatchingErrorKind::InvalidThreshold(1.5));
        assert!(err.to_string().contains("engine"));
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(
            source.as_deref(),
            Some("Invalid threshold value: 1.5 (must be 0.0-1.0)")
        );
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(DiffCheckerError::matching(
                "base",
                MatchingErrorKind::InvalidThreshold(2.0),
            ))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        match outer() {
            Err(DiffCheckerError::Matching { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Matching error, got {other:?}"),
        }
    }

    #[test]
    fn test_input_context_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let read: Result<()> = Err(DiffCheckerError::input("b.txt", io_err));
        match read.context("reading inputs") {
            Err(DiffCheckerError::Input { path, message, .. }) => {
                assert_eq!(path, PathBuf::from("b.txt"));
                assert_eq!(message, "reading inputs: denied");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(DiffCheckerError::matching(
            "engine",
            MatchingErrorKind::InvalidThreshold(-1.0),
        ));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
