// ==========================================
// Recruit Desk - message log repository
// ==========================================
// Table: message_log
// Append-only apart from clearing the whole log
// ==========================================

use crate::domain::message_log::{MessageLogEntry, SendStatus};
use crate::domain::types::{Language, MessageKind};
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const SELECT_COLUMNS: &str = "id, timestamp, kind, candidate_name, phone, details, status, language, sender, notes";

/// Row as stored, before enum/timestamp parsing
struct StoredEntry {
    id: String,
    timestamp: String,
    kind: String,
    candidate_name: String,
    phone: String,
    details: String,
    status: String,
    language: String,
    sender: String,
    notes: String,
}

impl StoredEntry {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            timestamp: row.get(1)?,
            kind: row.get(2)?,
            candidate_name: row.get(3)?,
            phone: row.get(4)?,
            details: row.get(5)?,
            status: row.get(6)?,
            language: row.get(7)?,
            sender: row.get(8)?,
            notes: row.get(9)?,
        })
    }

    fn into_entry(self) -> RepositoryResult<MessageLogEntry> {
        let invalid = |field: &str, value: &str| RepositoryError::FieldValueError {
            field: field.to_string(),
            message: format!("unrecognized value '{}' in entry {}", value, self.id),
        };

        let timestamp = NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .map_err(|_| invalid("timestamp", &self.timestamp))?;
        let kind = MessageKind::from_str(&self.kind).ok_or_else(|| invalid("kind", &self.kind))?;
        let status =
            SendStatus::from_str(&self.status).ok_or_else(|| invalid("status", &self.status))?;
        let language = Language::from_str(&self.language)
            .ok_or_else(|| invalid("language", &self.language))?;

        Ok(MessageLogEntry {
            id: self.id,
            timestamp,
            kind,
            candidate_name: self.candidate_name,
            phone: self.phone,
            details: self.details,
            status,
            language,
            sender: self.sender,
            notes: self.notes,
        })
    }
}

// ==========================================
// MessageLogRepository
// ==========================================
pub struct MessageLogRepository {
    conn: Arc<Mutex<Connection>>,
}

impl MessageLogRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Append one entry
    ///
    /// # Returns
    /// - `Ok(id)` of the stored entry
    pub fn append(&self, entry: &MessageLogEntry) -> RepositoryResult<String> {
        let conn = self.get_conn()?;

        conn.execute(
            r#"
            INSERT INTO message_log (
                id, timestamp, kind, candidate_name, phone,
                details, status, language, sender, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            "#,
            params![
                entry.id,
                entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                entry.kind.to_db_str(),
                entry.candidate_name,
                entry.phone,
                entry.details,
                entry.status.to_db_str(),
                entry.language.code(),
                entry.sender,
                entry.notes,
            ],
        )?;

        debug!(id = %entry.id, kind = %entry.kind, "message log entry appended");
        Ok(entry.id.clone())
    }

    /// Entries newest first; same-second entries keep reverse insertion order
    pub fn list(&self, limit: Option<usize>) -> RepositoryResult<Vec<MessageLogEntry>> {
        let conn = self.get_conn()?;

        // SQLite treats LIMIT -1 as "no limit"
        let limit = limit.map(|l| l as i64).unwrap_or(-1);
        let sql = format!(
            "SELECT {} FROM message_log ORDER BY timestamp DESC, rowid DESC LIMIT ?1",
            SELECT_COLUMNS
        );

        let mut stmt = conn.prepare(&sql)?;
        let stored = stmt
            .query_map(params![limit], StoredEntry::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        stored.into_iter().map(StoredEntry::into_entry).collect()
    }

    pub fn count(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM message_log", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Delete every entry
    ///
    /// # Returns
    /// - `Ok(rows)` removed
    pub fn clear(&self) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let rows = conn.execute("DELETE FROM message_log", [])?;
        info!(rows, "message log cleared");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn setup_repo() -> MessageLogRepository {
        let conn = crate::db::open_in_memory().unwrap();
        MessageLogRepository::new(Arc::new(Mutex::new(conn)))
    }

    fn make_entry(id: &str, minute: u32) -> MessageLogEntry {
        MessageLogEntry {
            id: id.to_string(),
            timestamp: NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(10, minute, 0)
                .unwrap(),
            kind: MessageKind::Interview,
            candidate_name: "سارة".to_string(),
            phone: "966551234567".to_string(),
            details: "الإدارة الرئيسية".to_string(),
            status: SendStatus::Sent,
            language: Language::Ar,
            sender: "Admin".to_string(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_append_and_list_newest_first() {
        let repo = setup_repo();
        repo.append(&make_entry("a", 1)).unwrap();
        repo.append(&make_entry("b", 5)).unwrap();
        repo.append(&make_entry("c", 3)).unwrap();

        let ids: Vec<String> = repo.list(None).unwrap().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);
        assert_eq!(repo.count().unwrap(), 3);
    }

    #[test]
    fn test_list_with_limit() {
        let repo = setup_repo();
        for (i, id) in ["a", "b", "c"].iter().enumerate() {
            repo.append(&make_entry(id, i as u32)).unwrap();
        }
        let listed = repo.list(Some(2)).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "c");
    }

    #[test]
    fn test_same_timestamp_keeps_insertion_order_reversed() {
        let repo = setup_repo();
        repo.append(&make_entry("first", 0)).unwrap();
        repo.append(&make_entry("second", 0)).unwrap();
        let listed = repo.list(None).unwrap();
        assert_eq!(listed[0].id, "second");
    }

    #[test]
    fn test_roundtrip_fields() {
        let repo = setup_repo();
        let mut entry = make_entry("x", 7);
        entry.kind = MessageKind::InfoCollection;
        entry.language = Language::En;
        entry.notes = "call after 5".to_string();
        repo.append(&entry).unwrap();

        assert_eq!(repo.list(None).unwrap(), vec![entry]);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let repo = setup_repo();
        repo.append(&make_entry("dup", 0)).unwrap();
        let result = repo.append(&make_entry("dup", 1));
        assert!(matches!(result, Err(RepositoryError::UniqueConstraintViolation(_))));
    }

    #[test]
    fn test_clear() {
        let repo = setup_repo();
        repo.append(&make_entry("a", 0)).unwrap();
        repo.append(&make_entry("b", 1)).unwrap();
        assert_eq!(repo.clear().unwrap(), 2);
        assert_eq!(repo.count().unwrap(), 0);
        assert!(repo.list(None).unwrap().is_empty());
    }
}
