// ==========================================
// Preferences API
// ==========================================
// Display language / theme for every signed-in role;
// the info-collection form link is admin-only
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::require_permission;
use crate::config::ConfigManager;
use crate::domain::types::{Language, Role, Theme};
use crate::domain::user::{UiPreferences, User};
use std::sync::Arc;
use tracing::info;

pub struct PreferencesApi {
    config: Arc<ConfigManager>,
}

impl PreferencesApi {
    pub fn new(config: Arc<ConfigManager>) -> Self {
        Self { config }
    }

    pub fn get(&self, _user: &User) -> ApiResult<UiPreferences> {
        Ok(self.config.ui_preferences()?)
    }

    /// Change the stored language and/or theme; `None` keeps the current value
    pub fn update(
        &self,
        user: &User,
        language: Option<Language>,
        theme: Option<Theme>,
    ) -> ApiResult<UiPreferences> {
        let mut prefs = self.config.ui_preferences()?;
        if let Some(language) = language {
            prefs = prefs.with_language(language);
        }
        if let Some(theme) = theme {
            prefs = prefs.with_theme(theme);
        }

        self.config.save_ui_preferences(prefs)?;
        info!(language = %prefs.language, theme = %prefs.theme, by = %user.username, "preferences saved");
        Ok(prefs)
    }

    pub fn form_link(&self, _user: &User) -> ApiResult<String> {
        Ok(self.config.default_form_link()?)
    }

    /// Override the info-collection form link; an empty link restores the default
    pub fn set_form_link(&self, user: &User, link: &str) -> ApiResult<String> {
        require_permission(user.role == Role::Admin, "change form link")?;

        let link = link.trim();
        if !link.is_empty() && !link.starts_with("http") {
            return Err(ApiError::InvalidInput(format!("not a link: {}", link)));
        }

        self.config.set_default_form_link(link)?;
        info!(by = %user.username, "form link updated");
        Ok(self.config.default_form_link()?)
    }
}
