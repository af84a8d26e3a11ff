//! Error codes for the scoreboard adapters.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings
//! printed by the CLI.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Input validation
    /// Bid outside the hand size
    InvalidBid,
    /// Bid that would make the bid total equal the hand size
    ForbiddenBid,
    /// Trick count outside the hand size
    InvalidTricks,
    /// Trick counts do not add up to the hand size
    TricksTotalMismatch,
    /// Player is not seated in the current game
    UnknownPlayer,
    /// Round index past the recorded rounds
    RoundOutOfRange,
    /// No game of the required kind is running
    NoActiveGame,
    /// General validation error
    ValidationError,

    // Conflicts
    /// Another mode still has a game in progress
    ActiveGame,

    // System errors
    StorageError,
    ConfigError,
    Internal,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidBid => "INVALID_BID",
            Self::ForbiddenBid => "FORBIDDEN_BID",
            Self::InvalidTricks => "INVALID_TRICKS",
            Self::TricksTotalMismatch => "TRICKS_TOTAL_MISMATCH",
            Self::UnknownPlayer => "UNKNOWN_PLAYER",
            Self::RoundOutOfRange => "ROUND_OUT_OF_RANGE",
            Self::NoActiveGame => "NO_ACTIVE_GAME",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::ActiveGame => "ACTIVE_GAME",

            Self::StorageError => "STORAGE_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::Internal => "INTERNAL",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
