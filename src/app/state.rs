// ==========================================
// Recruit Desk - application state
// ==========================================
// Owns the shared connection and wires repositories into the APIs
// ==========================================

use crate::api::{
    ApiError, ApiResult, CandidateApi, ComposerApi, HistoryApi, PreferencesApi, TemplateApi,
};
use crate::auth::{Authenticator, StaticCredentialTable, CREDENTIALS_ENV};
use crate::config::ConfigManager;
use crate::db::open_sqlite_connection;
use crate::repository::{CandidateRepository, MessageLogRepository};
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

/// Every API instance plus the shared resources behind them
pub struct AppState {
    pub db_path: String,
    pub config: Arc<ConfigManager>,
    pub composer_api: Arc<ComposerApi>,
    pub history_api: Arc<HistoryApi>,
    pub template_api: Arc<TemplateApi>,
    pub candidate_api: Arc<CandidateApi>,
    pub preferences_api: Arc<PreferencesApi>,
}

impl AppState {
    /// Open the database at `db_path` and build every API on one shared connection
    pub fn new(db_path: String) -> ApiResult<Self> {
        tracing::info!(db_path = %db_path, "initializing app state");

        let conn = open_sqlite_connection(&db_path)
            .map_err(|e| ApiError::DatabaseError(format!("cannot open database: {}", e)))?;

        Self::from_connection(db_path, Arc::new(Mutex::new(conn)))
    }

    /// Build on an existing (already initialized) connection
    pub fn from_connection(db_path: String, conn: Arc<Mutex<Connection>>) -> ApiResult<Self> {
        let config = Arc::new(ConfigManager::from_connection(conn.clone())?);
        let log_repo = Arc::new(MessageLogRepository::new(conn.clone()));
        let candidate_repo = Arc::new(CandidateRepository::new(conn));

        Ok(Self {
            db_path,
            composer_api: Arc::new(ComposerApi::new(log_repo.clone(), config.clone())),
            history_api: Arc::new(HistoryApi::new(log_repo)),
            template_api: Arc::new(TemplateApi::new()),
            candidate_api: Arc::new(CandidateApi::new(candidate_repo)),
            preferences_api: Arc::new(PreferencesApi::new(config.clone())),
            config,
        })
    }
}

/// Authenticator from the file named by `RECRUIT_DESK_CREDENTIALS`
pub fn load_authenticator() -> ApiResult<Box<dyn Authenticator>> {
    let path = std::env::var(CREDENTIALS_ENV).map_err(|_| {
        ApiError::InvalidInput(format!("{} is not set", CREDENTIALS_ENV))
    })?;

    let table = StaticCredentialTable::from_json_file(path.trim())
        .map_err(|e| ApiError::InvalidInput(e.to_string()))?;
    Ok(Box::new(table))
}
