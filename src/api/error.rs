// ==========================================
// Recruit Desk - API error types
// ==========================================
// Maps repository / import / compose errors onto what the operator
// is told. `user_message` gives the localized text; Display keeps
// the technical detail for logs.
// ==========================================

use crate::domain::types::Language;
use crate::engine::composer::ComposeError;
use crate::i18n::{t_in, t_in_with_args};
use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    // ===== access =====
    #[error("forbidden: {action} requires another role")]
    Forbidden { action: &'static str },

    // ===== input =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("candidate name and phone number are required")]
    MissingRecipient,

    #[error("not found: {0}")]
    NotFound(String),

    // ===== import =====
    #[error("file import failed: {0}")]
    ImportError(String),

    // ===== storage =====
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ApiError {
    /// Text to show the operator
    pub fn user_message(&self, language: Language) -> String {
        match self {
            ApiError::Forbidden { .. } => t_in("api.forbidden", language),
            ApiError::InvalidInput(detail) => {
                t_in_with_args("api.invalid_input", language, &[("detail", detail)])
            }
            ApiError::MissingRecipient => t_in("compose.missing_recipient", language),
            ApiError::NotFound(_) => t_in("candidates.not_found", language),
            ApiError::ImportError(_) => t_in("import.unreadable", language),
            ApiError::DatabaseError(_)
            | ApiError::DatabaseTransactionError(_)
            | ApiError::Other(_) => t_in("api.storage", language),
        }
    }
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{}(id={})", entity, id))
            }
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseError(format!("lock failed: {}", msg))
            }
            RepositoryError::DatabaseTransactionError(msg) => ApiError::DatabaseTransactionError(msg),
            RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::InvalidInput(format!("duplicate record: {}", msg))
            }
            RepositoryError::FieldValueError { field, message } => {
                ApiError::DatabaseError(format!("stored field {} unreadable: {}", field, message))
            }
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

impl From<ComposeError> for ApiError {
    fn from(err: ComposeError) -> Self {
        match err {
            ComposeError::MissingRecipient => ApiError::MissingRecipient,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
