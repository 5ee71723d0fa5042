//! Error taxonomy for transcript building.
//!
//! Record-level variants are recovered by skipping the offending record.
//! Run-level variants abort the run before any output is produced.

use thiserror::Error;

/// Errors that can occur while turning an export into a transcript.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranscriptError {
    /// The `create_time` field lacks the `$date.$numberLong` structure or is out of range
    #[error("Invalid timestamp: {0}")]
    MalformedTimestamp(String),

    /// A required response field is absent or null
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A response reuses an identifier already loaded for this conversation
    #[error("Duplicate response id: {0}")]
    DuplicateResponseId(String),

    /// No conversation title contains the requested substring
    #[error("No convo matching title '{}'", .filter.as_deref().unwrap_or_default())]
    NoMatchingConversation { filter: Option<String>, available: Vec<String> },

    /// Selection and filtering left nothing to render
    #[error("No responses loaded. Check timestamps or structure.")]
    NoResponsesLoaded,

    /// Parent links loop back on themselves
    #[error("Cyclic branch structure detected at response {0}")]
    CyclicBranchStructure(String),

    /// A child id in the branch tree has no matching response
    #[error("Response {parent} references non-existent child response {child}")]
    OrphanedBranchReference { parent: String, child: String },
}

impl TranscriptError {
    /// Soft failures end the run quietly with no output instead of failing the process.
    pub fn is_soft(&self) -> bool {
        matches!(self, Self::NoMatchingConversation { .. } | Self::NoResponsesLoaded)
    }
}

/// Result type for transcript operations.
pub type TranscriptResult<T> = Result<T, TranscriptError>;
