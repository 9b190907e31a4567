// ==========================================
// Recruit Desk - domain value types
// ==========================================
// Language / theme / role / message kind
// Stored as short lowercase strings in config_kv and message_log
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Language
// ==========================================
// Arabic is the office default; every template and label has both variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ar,
    En,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Ar, Language::En];

    /// Locale code used by rust-i18n and the config table
    pub fn code(&self) -> &'static str {
        match self {
            Language::Ar => "ar",
            Language::En => "en",
        }
    }

    /// Parse a locale code ("ar", "en", "en-US", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_lowercase();
        match code.split(['-', '_']).next().unwrap_or("") {
            "ar" => Some(Language::Ar),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ==========================================
// Theme
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Sepia,
}

impl Theme {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "sepia" => Some(Theme::Sepia),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Sepia => "sepia",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// Role
// ==========================================
// admin: everything
// manager: history + templates, reads candidates
// staff: compose, import and annotate candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
}

impl Role {
    pub fn can_compose(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }

    pub fn can_view_history(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    pub fn can_view_templates(&self) -> bool {
        matches!(self, Role::Admin | Role::Manager)
    }

    /// Import, annotate and delete single candidates
    pub fn can_edit_candidates(&self) -> bool {
        matches!(self, Role::Admin | Role::Staff)
    }

    /// Bulk delete and clear the candidate list
    pub fn can_purge_candidates(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "staff" => Some(Role::Staff),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Staff => "staff",
        }
    }

    /// i18n key for the role label
    pub fn label_key(&self) -> &'static str {
        match self {
            Role::Admin => "role.admin",
            Role::Manager => "role.manager",
            Role::Staff => "role.staff",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}

// ==========================================
// MessageKind
// ==========================================
// Closed set, one template per kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Interview,      // interview invitation
    Reminder,       // same-day reminder
    InfoCollection, // screening form request
    Rejection,      // rejection notice
}

/// Form inputs a message kind actually reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeInput {
    Location,
    Date,
    Day,
    Time,
    FormLink,
    Position,
}

impl MessageKind {
    pub const ALL: [MessageKind; 4] = [
        MessageKind::Interview,
        MessageKind::Reminder,
        MessageKind::InfoCollection,
        MessageKind::Rejection,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "INTERVIEW" => Some(MessageKind::Interview),
            "REMINDER" => Some(MessageKind::Reminder),
            "INFO_COLLECTION" | "INFO" => Some(MessageKind::InfoCollection),
            "REJECTION" => Some(MessageKind::Rejection),
            _ => None,
        }
    }

    pub fn to_db_str(&self) -> &'static str {
        match self {
            MessageKind::Interview => "INTERVIEW",
            MessageKind::Reminder => "REMINDER",
            MessageKind::InfoCollection => "INFO_COLLECTION",
            MessageKind::Rejection => "REJECTION",
        }
    }

    /// i18n key for the kind label
    pub fn label_key(&self) -> &'static str {
        match self {
            MessageKind::Interview => "kind.interview",
            MessageKind::Reminder => "kind.reminder",
            MessageKind::InfoCollection => "kind.info_collection",
            MessageKind::Rejection => "kind.rejection",
        }
    }

    /// Which form inputs are relevant for this kind.
    ///
    /// The renderer ignores this; it only drives which inputs a caller shows
    /// and which values it bothers to collect.
    pub fn relevant_inputs(&self) -> &'static [ComposeInput] {
        match self {
            MessageKind::Interview => &[
                ComposeInput::Location,
                ComposeInput::Date,
                ComposeInput::Day,
                ComposeInput::Time,
            ],
            MessageKind::Reminder => &[ComposeInput::Location],
            MessageKind::InfoCollection => &[ComposeInput::FormLink, ComposeInput::Position],
            MessageKind::Rejection => &[],
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_db_str())
    }
}
