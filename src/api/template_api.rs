// ==========================================
// Template API
// ==========================================
// Read-only view of the template catalog
// ==========================================

use crate::api::error::ApiResult;
use crate::api::require_permission;
use crate::catalog::templates::TEMPLATES;
use crate::domain::message::Placeholder;
use crate::domain::types::{Language, MessageKind};
use crate::domain::user::User;
use crate::i18n::t_in;
use serde::Serialize;

/// One template as shown in the viewer
#[derive(Debug, Clone, Serialize)]
pub struct TemplateView {
    pub kind: MessageKind,
    pub label: String,
    pub body: &'static str,
    pub placeholders: Vec<Placeholder>,
}

#[derive(Default)]
pub struct TemplateApi;

impl TemplateApi {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self, user: &User, language: Language) -> ApiResult<Vec<TemplateView>> {
        require_permission(user.role.can_view_templates(), "templates")?;

        Ok(TEMPLATES
            .iter()
            .map(|template| TemplateView {
                kind: template.kind,
                label: t_in(template.kind.label_key(), language),
                body: template.body(language),
                placeholders: template.referenced_placeholders(language),
            })
            .collect())
    }
}
