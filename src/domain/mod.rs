// ==========================================
// Recruit Desk - domain layer
// ==========================================
// Responsibility: entities and value types
// No data access, no engine logic
// ==========================================

pub mod candidate;
pub mod message;
pub mod message_log;
pub mod types;
pub mod user;

// Re-exports
pub use candidate::{CandidateField, CandidateRecord, CellValue, RawRow, FIELD_FALLBACK};
pub use message::{LocalizedText, MessageTemplate, Placeholder, RenderContext};
pub use message_log::{MessageLogEntry, SendStatus};
pub use types::{ComposeInput, Language, MessageKind, Role, Theme};
pub use user::{Credentials, UiPreferences, User};
