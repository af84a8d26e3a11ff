//! Domain-level error type used by the engines and the session coordinator.
//!
//! This error type is storage- and CLI-agnostic. Adapters return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! using the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Validation kinds surfaced by the advisory checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Bid outside `0..=cards`.
    InvalidBid,
    /// The one value the last bidder may not choose.
    ForbiddenBid,
    /// Trick count outside `0..=cards`.
    InvalidTricks,
    /// Tricks of a complete round do not add up to the hand size.
    TricksTotalMismatch,
    /// Player id is not part of the seating order.
    UnknownPlayer,
    /// Historical round index past the recorded rounds.
    RoundOutOfRange,
    /// Command does not fit the current session shape.
    NoActiveGame,
}

/// Conflict kinds (extend as needed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConflictKind {
    /// Another mode has a game with recorded progress.
    ActiveGame,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input validation or game rule violation
    Validation(ValidationKind, String),
    /// Semantic conflict
    Conflict(ConflictKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::Validation(kind, d) => write!(f, "validation error {kind:?}: {d}"),
            DomainError::Conflict(kind, d) => write!(f, "conflict {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn conflict(kind: ConflictKind, detail: impl Into<String>) -> Self {
        Self::Conflict(kind, detail.into())
    }

    /// Validation kind, if this is a validation error.
    pub fn validation_kind(&self) -> Option<ValidationKind> {
        match self {
            DomainError::Validation(kind, _) => Some(*kind),
            DomainError::Conflict(..) => None,
        }
    }
}
