// ==========================================
// Recruit Desk - candidate repository
// ==========================================
// Table: candidate
// Field values live in values_json; name/phone are copied into columns
// for listing. Only notes change after insert.
// ==========================================

use crate::domain::candidate::CandidateRecord;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

pub struct CandidateRepository {
    conn: Arc<Mutex<Connection>>,
}

fn stored_columns(row: &Row<'_>) -> rusqlite::Result<(String, String)> {
    Ok((row.get(0)?, row.get(1)?))
}

fn decode(values_json: &str, notes: String) -> RepositoryResult<CandidateRecord> {
    let mut record: CandidateRecord = serde_json::from_str(values_json)?;
    record.notes = notes;
    Ok(record)
}

impl CandidateRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    // ==========================================
    // Writes
    // ==========================================

    /// Insert one import batch in a single transaction
    ///
    /// # Parameters
    /// - `batch_id`: import run the records came from
    /// - `records`: in file order; that order is kept by `list`
    ///
    /// # Returns
    /// - `Ok(count)` inserted; nothing is inserted on error
    pub fn insert_batch(&self, batch_id: &str, records: &[CandidateRecord]) -> RepositoryResult<usize> {
        let mut conn = self.get_conn()?;
        let tx = conn.transaction()?;

        let next_seq: i64 =
            tx.query_row("SELECT COALESCE(MAX(seq), 0) + 1 FROM candidate", [], |row| row.get(0))?;
        let imported_at = Utc::now().naive_utc().format("%Y-%m-%d %H:%M:%S").to_string();

        let mut count = 0;
        for (offset, record) in records.iter().enumerate() {
            let values_json = serde_json::to_string(record)?;
            tx.execute(
                r#"
                INSERT INTO candidate (
                    id, seq, batch_id, full_name, phone, values_json, notes, imported_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    record.id,
                    next_seq + offset as i64,
                    batch_id,
                    record.full_name(),
                    record.phone(),
                    values_json,
                    record.notes,
                    imported_at,
                ],
            )?;
            count += 1;
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        info!(batch_id, count, "candidates stored");
        Ok(count)
    }

    /// Replace a candidate's notes
    pub fn update_notes(&self, id: &str, notes: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let rows = conn.execute(
            "UPDATE candidate SET notes = ?1 WHERE id = ?2",
            params![notes, id],
        )?;

        if rows == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Candidate".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Delete one candidate; `Ok(false)` when the id is unknown
    pub fn delete(&self, id: &str) -> RepositoryResult<bool> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM candidate WHERE id = ?1", params![id])?;
        debug!(id, deleted = rows > 0, "candidate delete");
        Ok(rows > 0)
    }

    /// Delete a selection; unknown ids are ignored
    pub fn delete_many(&self, ids: &[String]) -> RepositoryResult<usize> {
        if ids.is_empty() {
            return Ok(0);
        }

        let conn = self.get_conn()?;
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM candidate WHERE id IN ({})", placeholders);
        let rows = conn.execute(&sql, params_from_iter(ids.iter()))?;
        Ok(rows)
    }

    pub fn clear(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM candidate", [])?;
        info!(rows, "candidates cleared");
        Ok(rows)
    }

    // ==========================================
    // Reads
    // ==========================================

    /// All candidates in import order
    pub fn list(&self) -> RepositoryResult<Vec<CandidateRecord>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare("SELECT values_json, notes FROM candidate ORDER BY seq ASC")?;
        let rows = stmt
            .query_map([], stored_columns)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        rows.into_iter()
            .map(|(values_json, notes)| decode(&values_json, notes))
            .collect()
    }

    pub fn find_by_id(&self, id: &str) -> RepositoryResult<Option<CandidateRecord>> {
        let conn = self.get_conn()?;
        let row = conn
            .query_row(
                "SELECT values_json, notes FROM candidate WHERE id = ?1",
                params![id],
                stored_columns,
            )
            .optional()?;

        row.map(|(values_json, notes)| decode(&values_json, notes))
            .transpose()
    }

    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM candidate", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
