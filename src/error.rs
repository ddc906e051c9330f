//! Unified error types for lostfound-matcher.
//!
//! Matching itself never fails: degenerate input resolves to an empty result.
//! These errors cover the surrounding layers: loading item snapshots,
//! talking to a repository, configuration and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for lostfound-matcher operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MatcherError {
    /// Errors while reading or decoding an item snapshot
    #[error("Failed to load item snapshot: {context}")]
    Snapshot {
        context: String,
        #[source]
        source: SnapshotErrorKind,
    },

    /// Errors reported by an item repository
    #[error("Repository operation failed: {context}")]
    Repository {
        context: String,
        #[source]
        source: RepositoryErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific snapshot error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SnapshotErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Item {id} listed under {expected} items but describes a {actual} item")]
    KindMismatch {
        id: u64,
        expected: String,
        actual: String,
    },

    #[error("Duplicate {kind} item id {id}")]
    DuplicateId { kind: String, id: u64 },
}

/// Specific repository error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RepositoryErrorKind {
    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for lostfound-matcher operations
pub type Result<T> = std::result::Result<T, MatcherError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl MatcherError {
    /// Create a snapshot error with context
    pub fn snapshot(context: impl Into<String>, source: SnapshotErrorKind) -> Self {
        Self::Snapshot {
            context: context.into(),
            source,
        }
    }

    /// Create a repository error with context
    pub fn repository(context: impl Into<String>, source: RepositoryErrorKind) -> Self {
        Self::Repository {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for MatcherError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for MatcherError {
    fn from(err: serde_json::Error) -> Self {
        Self::snapshot(
            "JSON deserialization",
            SnapshotErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain, so an error that crossed several layers reads
/// `outer: middle: inner`.
///
/// # Example
///
/// ```ignore
/// use lostfound_matcher::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<ItemSnapshot> {
///     let content = std::fs::read_to_string(path).context("reading snapshot file")?;
///     ItemSnapshot::from_json(&content)
///         .with_context(|| format!("parsing snapshot from {}", path.display()))
/// }
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

impl<T, E: Into<MatcherError>> ErrorContext<T> for std::result::Result<T, E> {
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

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: MatcherError, new_ctx: &str) -> MatcherError {
    match err {
        MatcherError::Snapshot {
            context: existing,
            source,
        } => MatcherError::Snapshot {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MatcherError::Repository {
            context: existing,
            source,
        } => MatcherError::Repository {
            context: chain_context(new_ctx, &existing),
            source,
        },
        MatcherError::Io {
            path,
            message,
            source,
        } => MatcherError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        MatcherError::Validation(msg) => MatcherError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
