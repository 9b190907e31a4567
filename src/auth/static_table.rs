// ==========================================
// Recruit Desk - static credential table
// ==========================================
// JSON list of accounts, loaded from a file named by
// RECRUIT_DESK_CREDENTIALS. Username match is case-insensitive,
// password match is exact.
// ==========================================

use super::{AuthError, AuthOutcome, AuthResult, Authenticator};
use crate::domain::types::{Language, Role};
use crate::domain::user::{Credentials, User};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable naming the credential file
pub const CREDENTIALS_ENV: &str = "RECRUIT_DESK_CREDENTIALS";

/// One account as written in the credential file
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialEntry {
    pub username: String,
    pub password: String,
    pub role: Role,
    pub display_name_ar: String,
    pub display_name_en: String,
}

impl CredentialEntry {
    fn display_name(&self, language: Language) -> &str {
        match language {
            Language::Ar => &self.display_name_ar,
            Language::En => &self.display_name_en,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticCredentialTable {
    entries: HashMap<String, CredentialEntry>, // key: lowercased username
}

impl StaticCredentialTable {
    pub fn from_entries(entries: Vec<CredentialEntry>) -> AuthResult<Self> {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            let key = entry.username.trim().to_lowercase();
            if map.contains_key(&key) {
                return Err(AuthError::DuplicateUser(key));
            }
            map.insert(key, entry);
        }
        Ok(Self { entries: map })
    }

    pub fn from_json_str(json: &str) -> AuthResult<Self> {
        let entries: Vec<CredentialEntry> = serde_json::from_str(json)?;
        Self::from_entries(entries)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> AuthResult<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let table = Self::from_json_str(&raw)?;
        info!(path = %path.as_ref().display(), accounts = table.len(), "credential table loaded");
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Authenticator for StaticCredentialTable {
    fn authenticate(&self, credentials: &Credentials, language: Language) -> AuthOutcome {
        let key = credentials.username.trim().to_lowercase();
        match self.entries.get(&key) {
            Some(entry) if entry.password == credentials.password => AuthOutcome::Granted(User {
                username: credentials.username.trim().to_string(),
                role: entry.role,
                display_name: entry.display_name(language).to_string(),
            }),
            _ => {
                debug!(username = %key, "sign-in denied");
                AuthOutcome::Denied
            }
        }
    }
}
