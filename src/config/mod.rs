// ==========================================
// Recruit Desk - configuration layer
// ==========================================
// Static catalogs live in `catalog`; this layer holds the runtime
// preferences stored in config_kv and the database location.
// ==========================================

pub mod config_manager;

pub use config_manager::{config_keys, get_default_db_path, ConfigManager, DB_PATH_ENV};
