//! Error types for work-manager
//!
//! A single `WorkManagerError` enum covers the whole crate. Each variant maps
//! to exactly one machine-readable kind (used in API error bodies) and one
//! HTTP status class, so the API layer never has to pattern-match on message
//! strings.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience result type used throughout the crate
pub type Result<T> = std::result::Result<T, WorkManagerError>;

/// All errors that can occur in work-manager
#[derive(Debug, Error)]
pub enum WorkManagerError {
    /// One or more request fields failed validation
    #[error("validation failed: {}", issues.join("; "))]
    Validation {
        /// One entry per offending field, e.g. "effort must be a non-negative integer"
        issues: Vec<String>,
    },

    /// The requested ticket does not exist (or the board file itself is absent on update)
    #[error("ticket {id} not found")]
    TicketNotFound { id: u64 },

    /// The board file exists but cannot be parsed as a ticket collection
    #[error("board file {} is corrupted: {source}", path.display())]
    CorruptStore {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Writing the board file failed
    #[error("failed to persist board file {}: {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Any other I/O failure (reading the board file, binding sockets, ...)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkManagerError {
    /// Build a validation error for a single offending field
    pub fn validation(issue: impl Into<String>) -> Self {
        Self::Validation {
            issues: vec![issue.into()],
        }
    }

    /// Flattens this error into per-field issue strings.
    ///
    /// Validators use this to accumulate problems across several fields
    /// before reporting them as a single `Validation` error.
    #[must_use]
    pub fn into_issues(self) -> Vec<String> {
        match self {
            Self::Validation { issues } => issues,
            other => vec![other.to_string()],
        }
    }

    /// Machine-readable error kind, stable across releases
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::TicketNotFound { .. } => "not_found",
            Self::CorruptStore { .. } => "corrupt_store",
            Self::Persistence { .. } => "persistence_error",
            Self::Config(_) => "config_error",
            Self::Io(_) => "io_error",
        }
    }
}
