// ==========================================
// Recruit Desk - API layer
// ==========================================
// Responsibility: role checks, engine + repository orchestration,
// user-facing error mapping
// ==========================================

pub mod candidate_api;
pub mod composer_api;
pub mod error;
pub mod history_api;
pub mod preferences_api;
pub mod template_api;

pub use candidate_api::{CandidateApi, CandidateImportResponse};
pub use composer_api::ComposerApi;
pub use error::{ApiError, ApiResult};
pub use history_api::HistoryApi;
pub use preferences_api::PreferencesApi;
pub use template_api::{TemplateApi, TemplateView};

/// `Forbidden` unless the role check passed
pub(crate) fn require_permission(allowed: bool, action: &'static str) -> ApiResult<()> {
    if allowed {
        Ok(())
    } else {
        Err(ApiError::Forbidden { action })
    }
}
