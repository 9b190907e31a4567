// ==========================================
// Recruit Desk - import layer
// ==========================================
// Responsibility: spreadsheet files → CandidateRecord
// Supports: CSV, Excel, ODS
// ==========================================

pub mod candidate_importer;
pub mod error;
pub mod file_parser;

pub use candidate_importer::{CandidateImporter, ImportReport};
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvParser, ExcelParser, FileParser, UniversalFileParser};
