//! Error codes for the trivia backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request Validation
    /// Path identifier is not a well-formed record id
    InvalidId,
    /// Category title missing or blank
    InvalidTitle,
    /// Page query parameter out of range
    InvalidPage,
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,

    // Resource Not Found
    CategoryNotFound,
    ClueNotFound,
    GameNotFound,
    CustomGameNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Category title already taken
    UniqueTitle,
    /// Row still referenced, or reference to a missing row
    FkViolation,
    /// Transaction contention; the whole operation may be retried
    TransientConflict,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    DbError,
    DbUnavailable,
    DbTimeout,
    /// Stored references do not resolve
    DataIntegrity,
    Internal,
    InternalError,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidId => "INVALID_ID",
            Self::InvalidTitle => "INVALID_TITLE",
            Self::InvalidPage => "INVALID_PAGE",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",

            Self::CategoryNotFound => "CATEGORY_NOT_FOUND",
            Self::ClueNotFound => "CLUE_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::CustomGameNotFound => "CUSTOM_GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueTitle => "UNIQUE_TITLE",
            Self::FkViolation => "FK_VIOLATION",
            Self::TransientConflict => "TRANSIENT_CONFLICT",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataIntegrity => "DATA_INTEGRITY",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
