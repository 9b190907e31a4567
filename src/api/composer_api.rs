// ==========================================
// Composer API
// ==========================================
// Preview and send; sending appends to the message log
// ==========================================

use crate::api::error::ApiResult;
use crate::api::require_permission;
use crate::config::ConfigManager;
use crate::domain::types::Language;
use crate::domain::user::User;
use crate::engine::composer::{self, ComposeForm, Dispatch};
use crate::repository::MessageLogRepository;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracing::info;

pub struct ComposerApi {
    log_repo: Arc<MessageLogRepository>,
    config: Arc<ConfigManager>,
}

impl ComposerApi {
    pub fn new(log_repo: Arc<MessageLogRepository>, config: Arc<ConfigManager>) -> Self {
        Self { log_repo, config }
    }

    /// Starting form, with the stored form link override applied
    pub fn new_form(&self, language: Language, today: NaiveDate) -> ApiResult<ComposeForm> {
        let mut form = ComposeForm::new(language, today);
        form.form_link = self.config.default_form_link()?;
        Ok(form)
    }

    pub fn preview(&self, user: &User, form: &ComposeForm, language: Language) -> ApiResult<String> {
        require_permission(user.role.can_compose(), "compose")?;
        Ok(composer::preview(form, language))
    }

    /// Validate, render, build the wa.me link and log the message
    ///
    /// # Returns
    /// - Ok(Dispatch): text, link and the stored log entry
    /// - Err(ApiError::MissingRecipient): name or phone missing; nothing is logged
    pub fn send(
        &self,
        user: &User,
        form: &ComposeForm,
        language: Language,
        now: NaiveDateTime,
    ) -> ApiResult<Dispatch> {
        require_permission(user.role.can_compose(), "compose")?;

        let dispatch = composer::prepare_dispatch(form, language, &user.display_name, now)?;
        self.log_repo.append(&dispatch.entry)?;

        info!(
            id = %dispatch.entry.id,
            kind = %dispatch.entry.kind,
            sender = %user.username,
            "message logged"
        );
        Ok(dispatch)
    }
}
