//! Error types for the line-timing pipeline
//!
//! Every failure is fatal for the run: there is no retry and no partial report.

use thiserror::Error;

/// Errors raised while turning a timing transcript into a line report
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    /// The external compiler exited with a non-zero status
    #[error("compilation failed: `{command}` exited with {status}")]
    CompilationFailed { command: String, status: String },

    /// A transcript line carries a timing field but its offsets or label are unusable
    #[error("malformed record on transcript line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A parsed offset falls outside the source text (source/transcript mismatch)
    #[error("offset {offset} on transcript line {line} is outside the source text (length {len})")]
    OffsetOutOfRange {
        line: usize,
        offset: usize,
        len: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ProfileError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Result alias for the core pipeline stages
pub type Result<T> = std::result::Result<T, ProfileError>;
