// ==========================================
// Recruit Desk - user / session model
// ==========================================

use crate::domain::types::{Language, Role, Theme};
use serde::{Deserialize, Serialize};

/// Signed-in operator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    pub display_name: String,
}

/// Login form input
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// UI preferences passed explicitly into calls instead of living in globals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UiPreferences {
    pub language: Language,
    pub theme: Theme,
}

impl UiPreferences {
    pub fn with_language(self, language: Language) -> Self {
        Self { language, ..self }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }
}
