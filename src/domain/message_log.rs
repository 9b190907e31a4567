// ==========================================
// Recruit Desk - message log model
// ==========================================
// One entry per dispatched message, newest first when listed
// Entries are never edited; the whole log can be cleared
// ==========================================

use crate::domain::types::{Language, MessageKind};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// SendStatus
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SendStatus {
    Sent,
}

impl SendStatus {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SENT" => Some(SendStatus::Sent),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            SendStatus::Sent => "SENT",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            SendStatus::Sent => "status.sent",
        }
    }
}

impl fmt::Display for SendStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// MessageLogEntry
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageLogEntry {
    pub id: String,
    pub timestamp: NaiveDateTime,
    pub kind: MessageKind,
    pub candidate_name: String,
    pub phone: String,          // normalized digits
    pub details: String,        // location name or position
    pub status: SendStatus,
    pub language: Language,     // language the message was composed in
    pub sender: String,         // sender display name
    pub notes: String,
}

impl MessageLogEntry {
    /// Timestamp the way the history table shows it
    pub fn display_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M").to_string()
    }
}
