// ==========================================
// History API
// ==========================================

use crate::api::error::ApiResult;
use crate::api::require_permission;
use crate::domain::message_log::MessageLogEntry;
use crate::domain::user::User;
use crate::repository::MessageLogRepository;
use std::sync::Arc;
use tracing::info;

pub struct HistoryApi {
    log_repo: Arc<MessageLogRepository>,
}

impl HistoryApi {
    pub fn new(log_repo: Arc<MessageLogRepository>) -> Self {
        Self { log_repo }
    }

    /// Sent messages, newest first
    pub fn list(&self, user: &User, limit: Option<usize>) -> ApiResult<Vec<MessageLogEntry>> {
        require_permission(user.role.can_view_history(), "history")?;
        Ok(self.log_repo.list(limit)?)
    }

    pub fn count(&self, user: &User) -> ApiResult<usize> {
        require_permission(user.role.can_view_history(), "history")?;
        Ok(self.log_repo.count()?)
    }

    /// Wipe the log; the caller is expected to have confirmed
    pub fn clear(&self, user: &User) -> ApiResult<usize> {
        require_permission(user.role.can_view_history(), "history")?;
        let removed = self.log_repo.clear()?;
        info!(removed, by = %user.username, "history cleared");
        Ok(removed)
    }
}
