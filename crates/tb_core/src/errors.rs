//! Input rejection taxonomy.
//!
//! Every failure is a caller-side data problem: there is a single error kind
//! with one variant per violated precondition. `reason()` yields the stable
//! reason token; `Display` adds the offending detail.

use thiserror::Error;

/// Reason tokens, stable across releases (handy for scripts/tests).
pub const REASON_TOO_FEW: &str = "too few participants";
pub const REASON_DUPLICATE_ID: &str = "duplicate participant id";
pub const REASON_MISSING_ID: &str = "missing id";
pub const REASON_ODD_WITHOUT_BYES: &str = "odd count without byes";
pub const REASON_UNSUPPORTED_SIZE: &str = "unsupported bracket size";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("too few participants: got {count}, need at least 2")]
    TooFewParticipants { count: usize },

    #[error("duplicate participant id: {id}")]
    DuplicateParticipantId { id: String },

    /// `index` is the 0-based position in the caller's participant list.
    #[error("missing id: participant at index {index} has an empty id")]
    MissingId { index: usize },

    #[error("odd count without byes: {count} participants")]
    OddCountWithoutByes { count: usize },

    #[error("unsupported bracket size: {count} participants (byes allowed: {allow_byes})")]
    UnsupportedBracketSize { count: usize, allow_byes: bool },
}

impl InvalidInputError {
    /// Stable reason token for the violated precondition.
    pub fn reason(&self) -> &'static str {
        match self {
            InvalidInputError::TooFewParticipants { .. } => REASON_TOO_FEW,
            InvalidInputError::DuplicateParticipantId { .. } => REASON_DUPLICATE_ID,
            InvalidInputError::MissingId { .. } => REASON_MISSING_ID,
            InvalidInputError::OddCountWithoutByes { .. } => REASON_ODD_WITHOUT_BYES,
            InvalidInputError::UnsupportedBracketSize { .. } => REASON_UNSUPPORTED_SIZE,
        }
    }
}
