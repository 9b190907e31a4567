// ==========================================
// Candidate API
// ==========================================
// Import a spreadsheet and manage the stored candidate list
// Reads: any signed-in role / edits: Role::can_edit_candidates
// Bulk delete and clear: Role::can_purge_candidates
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::require_permission;
use crate::domain::candidate::{CandidateField, CandidateRecord};
use crate::domain::user::User;
use crate::importer::CandidateImporter;
use crate::repository::CandidateRepository;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Import summary returned to the caller
#[derive(Debug, Clone, Serialize)]
pub struct CandidateImportResponse {
    pub batch_id: String,
    pub total_rows: usize,
    pub imported: usize,
    /// Fields no row could resolve
    pub missing_columns: Vec<CandidateField>,
    pub fallback_counts: BTreeMap<CandidateField, usize>,
    /// Rows per field that matched a header only by containment
    pub partial_counts: BTreeMap<CandidateField, usize>,
    pub elapsed_ms: u64,
}

impl CandidateImportResponse {
    /// Fields that matched loosely in at least one row
    pub fn loosely_matched(&self) -> Vec<CandidateField> {
        self.partial_counts.keys().copied().collect()
    }
}

pub struct CandidateApi {
    candidate_repo: Arc<CandidateRepository>,
    importer: CandidateImporter,
}

impl CandidateApi {
    pub fn new(candidate_repo: Arc<CandidateRepository>) -> Self {
        Self::with_importer(candidate_repo, CandidateImporter::default())
    }

    pub fn with_importer(candidate_repo: Arc<CandidateRepository>, importer: CandidateImporter) -> Self {
        Self {
            candidate_repo,
            importer,
        }
    }

    /// Parse, resolve and store a spreadsheet
    ///
    /// # Returns
    /// - Ok(CandidateImportResponse)
    /// - Err(ApiError::Forbidden): role may not import
    /// - Err(ApiError::ImportError): unreadable file, nothing stored
    pub fn import_file<P: AsRef<Path>>(&self, user: &User, file_path: P) -> ApiResult<CandidateImportResponse> {
        require_permission(user.role.can_edit_candidates(), "import candidates")?;

        let report = self.importer.import_file(file_path.as_ref()).map_err(|e| {
            warn!(error = %e, "candidate import rejected");
            ApiError::from(e)
        })?;

        let imported = self
            .candidate_repo
            .insert_batch(&report.batch_id, &report.records)?;
        info!(batch_id = %report.batch_id, imported, by = %user.username, "candidate import stored");

        Ok(CandidateImportResponse {
            missing_columns: report.missing_columns(),
            batch_id: report.batch_id,
            total_rows: report.total_rows,
            imported,
            fallback_counts: report.fallback_counts,
            partial_counts: report.partial_counts,
            elapsed_ms: report.elapsed_ms,
        })
    }

    pub fn list(&self, _user: &User) -> ApiResult<Vec<CandidateRecord>> {
        Ok(self.candidate_repo.list()?)
    }

    pub fn get(&self, _user: &User, id: &str) -> ApiResult<CandidateRecord> {
        self.candidate_repo
            .find_by_id(id)?
            .ok_or_else(|| ApiError::NotFound(format!("Candidate(id={})", id)))
    }

    pub fn update_notes(&self, user: &User, id: &str, notes: &str) -> ApiResult<()> {
        require_permission(user.role.can_edit_candidates(), "edit candidate notes")?;
        Ok(self.candidate_repo.update_notes(id, notes.trim())?)
    }

    pub fn delete(&self, user: &User, id: &str) -> ApiResult<()> {
        require_permission(user.role.can_edit_candidates(), "delete candidate")?;
        if self.candidate_repo.delete(id)? {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("Candidate(id={})", id)))
        }
    }

    pub fn delete_many(&self, user: &User, ids: &[String]) -> ApiResult<usize> {
        require_permission(user.role.can_purge_candidates(), "delete candidates")?;
        let removed = self.candidate_repo.delete_many(ids)?;
        info!(removed, by = %user.username, "candidates deleted");
        Ok(removed)
    }

    pub fn clear(&self, user: &User) -> ApiResult<usize> {
        require_permission(user.role.can_purge_candidates(), "clear candidates")?;
        let removed = self.candidate_repo.clear()?;
        info!(removed, by = %user.username, "candidate list cleared");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_in_memory;
    use crate::domain::candidate::RawRow;
    use crate::domain::types::Role;
    use crate::engine::field_resolver::FieldResolver;
    use crate::importer::{FileParser, ImportResult};
    use std::sync::Mutex;

    struct FixedRows(Vec<RawRow>);

    impl FileParser for FixedRows {
        fn parse_to_raw_rows(&self, _file_path: &Path) -> ImportResult<Vec<RawRow>> {
            Ok(self.0.clone())
        }
    }

    fn user(role: Role) -> User {
        User {
            username: role.to_db_str().to_string(),
            role,
            display_name: role.to_db_str().to_string(),
        }
    }

    fn api_with_rows(rows: Vec<RawRow>) -> CandidateApi {
        let conn = Arc::new(Mutex::new(open_in_memory().unwrap()));
        let importer = CandidateImporter::new(Box::new(FixedRows(rows)), FieldResolver::default());
        CandidateApi::with_importer(Arc::new(CandidateRepository::new(conn)), importer)
    }

    fn two_rows() -> Vec<RawRow> {
        vec![
            RawRow::new().with("الاسم", "سارة").with("Mobile No.", "0551234567"),
            RawRow::new().with("الاسم", "Omar").with("Mobile No.", "0500000000"),
        ]
    }

    #[test]
    fn test_import_reports_partial_matches() {
        let api = api_with_rows(two_rows());
        let response = api.import_file(&user(Role::Staff), "rows.csv").unwrap();

        assert_eq!(response.imported, 2);
        // "Mobile No." only contains the "mobile" alias
        assert_eq!(response.partial_counts.get(&CandidateField::Phone), Some(&2));
        assert!(response.loosely_matched().contains(&CandidateField::Phone));
        assert!(!response.loosely_matched().contains(&CandidateField::FullName));
    }

    #[test]
    fn test_manager_reads_but_does_not_edit() {
        let api = api_with_rows(two_rows());
        let manager = user(Role::Manager);

        assert!(matches!(
            api.import_file(&manager, "rows.csv"),
            Err(ApiError::Forbidden { .. })
        ));

        api.import_file(&user(Role::Staff), "rows.csv").unwrap();
        let listed = api.list(&manager).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(api.get(&manager, &listed[0].id).unwrap().full_name(), "سارة");

        assert!(matches!(
            api.update_notes(&manager, &listed[0].id, "x"),
            Err(ApiError::Forbidden { .. })
        ));
        assert!(matches!(
            api.delete(&manager, &listed[0].id),
            Err(ApiError::Forbidden { .. })
        ));
    }

    #[test]
    fn test_only_admin_purges() {
        let api = api_with_rows(two_rows());
        let staff = user(Role::Staff);
        api.import_file(&staff, "rows.csv").unwrap();

        let ids: Vec<String> = api.list(&staff).unwrap().into_iter().map(|r| r.id).collect();
        assert!(matches!(api.clear(&staff), Err(ApiError::Forbidden { .. })));
        assert!(matches!(
            api.delete_many(&staff, &ids),
            Err(ApiError::Forbidden { .. })
        ));
        assert_eq!(api.list(&staff).unwrap().len(), 2);

        let admin = user(Role::Admin);
        assert_eq!(api.delete_many(&admin, &ids[..1]).unwrap(), 1);
        assert_eq!(api.clear(&admin).unwrap(), 1);
    }
}
