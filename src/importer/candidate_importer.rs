// ==========================================
// Recruit Desk - candidate importer
// ==========================================
// Flow: parse file → resolve each row → report
// Persisting the records is the caller's step
// ==========================================

use crate::domain::candidate::{CandidateField, CandidateRecord};
use crate::engine::field_resolver::FieldResolver;
use crate::importer::error::ImportResult;
use crate::importer::file_parser::{FileParser, UniversalFileParser};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Outcome of one import run
#[derive(Debug, Clone, Serialize)]
pub struct ImportReport {
    pub batch_id: String,
    pub total_rows: usize,
    pub records: Vec<CandidateRecord>,
    /// How many rows fell back to "-" for each field
    pub fallback_counts: BTreeMap<CandidateField, usize>,
    /// How many rows matched a field only through containment
    pub partial_counts: BTreeMap<CandidateField, usize>,
    pub elapsed_ms: u64,
}

impl ImportReport {
    /// Fields that no row could resolve
    pub fn missing_columns(&self) -> Vec<CandidateField> {
        self.fallback_counts
            .iter()
            .filter(|(_, count)| **count == self.total_rows && self.total_rows > 0)
            .map(|(field, _)| *field)
            .collect()
    }
}

pub struct CandidateImporter {
    file_parser: Box<dyn FileParser>,
    resolver: FieldResolver,
}

impl Default for CandidateImporter {
    fn default() -> Self {
        Self::new(Box::new(UniversalFileParser), FieldResolver::default())
    }
}

impl CandidateImporter {
    pub fn new(file_parser: Box<dyn FileParser>, resolver: FieldResolver) -> Self {
        Self {
            file_parser,
            resolver,
        }
    }

    /// Parse a spreadsheet and resolve every row into a CandidateRecord.
    ///
    /// # Returns
    /// - Ok(ImportReport): records in file order plus per-field fallback counts
    /// - Err(ImportError): the file could not be read or parsed
    #[instrument(skip(self, file_path), fields(batch_id))]
    pub fn import_file<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<ImportReport> {
        let start_time = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        let path = file_path.as_ref();
        info!(batch_id = %batch_id, file_path = %path.display(), "candidate import started");

        // === step 1: parse ===
        debug!("step 1: parse file");
        let raw_rows = self.file_parser.parse_to_raw_rows(path).map_err(|e| {
            error!(error = %e, "file parse failed");
            e
        })?;
        let total_rows = raw_rows.len();
        info!(total_rows, "file parsed");

        // === step 2: resolve ===
        debug!("step 2: resolve headers");
        let mut records = Vec::with_capacity(total_rows);
        let mut fallback_counts: BTreeMap<CandidateField, usize> = BTreeMap::new();
        let mut partial_counts: BTreeMap<CandidateField, usize> = BTreeMap::new();

        for row in &raw_rows {
            let resolved = self.resolver.resolve_record(row, Uuid::new_v4().to_string());
            for field in resolved.unresolved {
                *fallback_counts.entry(field).or_default() += 1;
            }
            for field in resolved.partial {
                *partial_counts.entry(field).or_default() += 1;
            }
            records.push(resolved.record);
        }

        let report = ImportReport {
            batch_id,
            total_rows,
            records,
            fallback_counts,
            partial_counts,
            elapsed_ms: start_time.elapsed().as_millis() as u64,
        };

        let missing = report.missing_columns();
        if !missing.is_empty() {
            warn!(missing = ?missing, "columns not found in file");
        }
        let without_recipient = records_without_recipient(&report.records);
        if without_recipient > 0 {
            warn!(count = without_recipient, "rows without name or phone");
        }

        info!(
            batch_id = %report.batch_id,
            imported = report.records.len(),
            elapsed_ms = report.elapsed_ms,
            "candidate import finished"
        );
        Ok(report)
    }
}

fn records_without_recipient(records: &[CandidateRecord]) -> usize {
    records
        .iter()
        .filter(|r| {
            !r.is_resolved(CandidateField::FullName) || !r.is_resolved(CandidateField::Phone)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::candidate::{RawRow, FIELD_FALLBACK};
    use crate::importer::error::ImportError;

    struct FixedRows(Vec<RawRow>);

    impl FileParser for FixedRows {
        fn parse_to_raw_rows(&self, _file_path: &Path) -> ImportResult<Vec<RawRow>> {
            Ok(self.0.clone())
        }
    }

    struct Unreadable;

    impl FileParser for Unreadable {
        fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
            Err(ImportError::FileReadError(file_path.display().to_string()))
        }
    }

    #[test]
    fn test_import_resolves_rows_and_counts_fallbacks() {
        let rows = vec![
            RawRow::new()
                .with("Full Name", "Sara")
                .with("Phone", "0551234567"),
            RawRow::new().with("Full Name", "Ali"),
        ];
        let importer = CandidateImporter::new(Box::new(FixedRows(rows)), FieldResolver::default());
        let report = importer.import_file("ignored.csv").unwrap();

        assert_eq!(report.total_rows, 2);
        assert_eq!(report.records.len(), 2);
        assert_eq!(report.records[0].full_name(), "Sara");
        assert_eq!(report.records[1].phone(), FIELD_FALLBACK);
        assert_eq!(report.fallback_counts.get(&CandidateField::Phone), Some(&1));
        assert_eq!(report.fallback_counts.get(&CandidateField::Education), Some(&2));
        assert!(report.missing_columns().contains(&CandidateField::Education));
        assert!(!report.missing_columns().contains(&CandidateField::Phone));
        assert_ne!(report.records[0].id, report.records[1].id);
    }

    #[test]
    fn test_import_propagates_parse_error() {
        let importer = CandidateImporter::new(Box::new(Unreadable), FieldResolver::default());
        assert!(matches!(
            importer.import_file("broken.xlsx"),
            Err(ImportError::FileReadError(_))
        ));
    }

    #[test]
    fn test_empty_file_has_no_missing_columns() {
        let importer = CandidateImporter::new(Box::new(FixedRows(vec![])), FieldResolver::default());
        let report = importer.import_file("empty.csv").unwrap();
        assert_eq!(report.total_rows, 0);
        assert!(report.missing_columns().is_empty());
    }
}
