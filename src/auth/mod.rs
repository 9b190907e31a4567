// ==========================================
// Recruit Desk - authentication
// ==========================================
// Authenticator is injected; engines never see credentials
// ==========================================

pub mod static_table;

use crate::domain::types::Language;
use crate::domain::user::{Credentials, User};
use thiserror::Error;

pub use static_table::{CredentialEntry, StaticCredentialTable, CREDENTIALS_ENV};

/// Result of a sign-in attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Granted(User),
    Denied,
}

impl AuthOutcome {
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthOutcome::Granted(user) => Some(user),
            AuthOutcome::Denied => None,
        }
    }
}

/// Resolves credentials to a user. `language` picks the display name variant.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials, language: Language) -> AuthOutcome;
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("credential file read failed: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("credential file is malformed: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("duplicate username in credential table: {0}")]
    DuplicateUser(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
