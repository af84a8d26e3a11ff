use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, ValidationKind};
use crate::errors::ErrorCode;

/// Machine-readable error body printed by the CLI.
#[derive(Debug, Serialize)]
pub struct ErrorReport {
    pub code: String,
    pub detail: String,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Storage error: {detail}")]
    Storage { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Internal error: {detail}")]
    Internal { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Storage { .. } => ErrorCode::StorageError,
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Internal { .. } => ErrorCode::Internal,
        }
    }

    pub fn detail(&self) -> &str {
        match self {
            AppError::Validation { detail, .. }
            | AppError::Conflict { detail, .. }
            | AppError::Storage { detail }
            | AppError::Config { detail }
            | AppError::Internal { detail } => detail,
        }
    }

    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            code: self.code().to_string(),
            detail: self.detail().to_string(),
        }
    }

    pub fn invalid(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Validation {
            code,
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn storage(detail: impl Into<String>) -> Self {
        Self::Storage {
            detail: detail.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }
}

fn validation_code(kind: ValidationKind) -> ErrorCode {
    match kind {
        ValidationKind::InvalidBid => ErrorCode::InvalidBid,
        ValidationKind::ForbiddenBid => ErrorCode::ForbiddenBid,
        ValidationKind::InvalidTricks => ErrorCode::InvalidTricks,
        ValidationKind::TricksTotalMismatch => ErrorCode::TricksTotalMismatch,
        ValidationKind::UnknownPlayer => ErrorCode::UnknownPlayer,
        ValidationKind::RoundOutOfRange => ErrorCode::RoundOutOfRange,
        ValidationKind::NoActiveGame => ErrorCode::NoActiveGame,
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(kind, detail) => AppError::Validation {
                code: validation_code(kind),
                detail,
            },
            DomainError::Conflict(kind, detail) => {
                let code = match kind {
                    ConflictKind::ActiveGame => ErrorCode::ActiveGame,
                };
                AppError::Conflict { code, detail }
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::storage(format!("malformed state document: {err}"))
    }
}
