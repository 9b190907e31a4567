// ==========================================
// Recruit Desk - configuration manager
// ==========================================
// Storage: config_kv table (key → value)
// Unknown or malformed stored values fall back to defaults
// ==========================================

use crate::catalog::lookups::DEFAULT_FORM_LINK;
use crate::db::open_sqlite_connection;
use crate::domain::types::{Language, Theme};
use crate::domain::user::UiPreferences;
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::warn;

/// Environment variable overriding the database location
pub const DB_PATH_ENV: &str = "RECRUIT_DESK_DB_PATH";

const APP_DIR_NAME: &str = "recruit-desk";
const DB_FILE_NAME: &str = "recruit_desk.db";

/// config_kv keys
pub mod config_keys {
    pub const UI_LANGUAGE: &str = "ui.language";
    pub const UI_THEME: &str = "ui.theme";
    pub const DEFAULT_FORM_LINK: &str = "compose.default_form_link";
}

// ==========================================
// ConfigManager
// ==========================================
pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    /// Open the database at `db_path` and manage its config_kv table
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Share an existing connection; PRAGMAs are re-applied (idempotent)
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        {
            let guard = conn
                .lock()
                .map_err(|e| RepositoryError::LockError(e.to_string()))?;
            crate::db::configure_sqlite_connection(&guard)?;
        }
        Ok(Self { conn })
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ===== raw access =====

    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    pub fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT INTO config_kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = ?2, updated_at = datetime('now')",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove_value(&self, key: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM config_kv WHERE key = ?1", params![key])?;
        Ok(rows > 0)
    }

    // ===== UI preferences =====

    /// Stored preferences; missing or unrecognized values use the defaults
    pub fn ui_preferences(&self) -> RepositoryResult<UiPreferences> {
        let mut prefs = UiPreferences::default();

        if let Some(raw) = self.get_value(config_keys::UI_LANGUAGE)? {
            match Language::from_str(&raw) {
                Some(language) => prefs = prefs.with_language(language),
                None => warn!(config_key = config_keys::UI_LANGUAGE, raw_value = %raw, "unrecognized language, using default"),
            }
        }

        if let Some(raw) = self.get_value(config_keys::UI_THEME)? {
            match Theme::from_str(&raw) {
                Some(theme) => prefs = prefs.with_theme(theme),
                None => warn!(config_key = config_keys::UI_THEME, raw_value = %raw, "unrecognized theme, using default"),
            }
        }

        Ok(prefs)
    }

    pub fn save_ui_preferences(&self, prefs: UiPreferences) -> RepositoryResult<()> {
        self.set_value(config_keys::UI_LANGUAGE, prefs.language.code())?;
        self.set_value(config_keys::UI_THEME, prefs.theme.to_db_str())?;
        Ok(())
    }

    // ===== composer defaults =====

    /// Info-collection form link, override first
    pub fn default_form_link(&self) -> RepositoryResult<String> {
        let stored = self
            .get_value(config_keys::DEFAULT_FORM_LINK)?
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        Ok(stored.unwrap_or_else(|| DEFAULT_FORM_LINK.to_string()))
    }

    pub fn set_default_form_link(&self, link: &str) -> RepositoryResult<()> {
        self.set_value(config_keys::DEFAULT_FORM_LINK, link.trim())
    }
}

/// Database location.
///
/// `RECRUIT_DESK_DB_PATH` wins; otherwise the user data directory
/// (`recruit-desk/recruit_desk.db`), else the working directory.
pub fn get_default_db_path() -> String {
    if let Ok(path) = std::env::var(DB_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from(DB_FILE_NAME);
    if let Some(data_dir) = dirs::data_dir() {
        let dir = data_dir.join(APP_DIR_NAME);
        // best-effort; opening the database reports the real failure
        std::fs::create_dir_all(&dir).ok();
        path = dir.join(DB_FILE_NAME);
    }

    path.to_string_lossy().to_string()
}
