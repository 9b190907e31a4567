// ==========================================
// Recruit Desk - core library
// ==========================================
// WhatsApp message templates for a recruiting office:
// spreadsheet header resolution, template rendering, message log
// Stack: Rust + SQLite
// ==========================================

// Localization (locales/ar.yml, locales/en.yml)
rust_i18n::i18n!("locales", fallback = "ar");

// ==========================================
// Modules
// ==========================================

// Domain layer - entities and value types
pub mod domain;

// Static catalogs - fields, templates, lookups
pub mod catalog;

// Engine layer - resolver, renderer, composer
pub mod engine;

// Import layer - spreadsheets
pub mod importer;

// Repository layer - data access
pub mod repository;

// Configuration
pub mod config;

// SQLite connection setup
pub mod db;

// Authentication
pub mod auth;

// API layer
pub mod api;

// Application wiring
pub mod app;

// Logging
pub mod logging;

// Localization
pub mod i18n;

// ==========================================
// Re-exports
// ==========================================

pub use domain::{
    CandidateField, CandidateRecord, CellValue, Language, MessageKind, MessageLogEntry,
    MessageTemplate, Placeholder, RawRow, RenderContext, Role, User,
};

pub use engine::{
    normalize, render, resolve, ComposeError, ComposeForm, FieldResolver,
    UNRESOLVED_PLACEHOLDER,
};

pub use api::{ApiError, CandidateApi, ComposerApi, HistoryApi, PreferencesApi, TemplateApi};

// ==========================================
// Constants
// ==========================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const APP_NAME: &str = "Recruit Desk";
