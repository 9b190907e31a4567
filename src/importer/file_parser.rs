// ==========================================
// Recruit Desk - spreadsheet parsers
// ==========================================
// CSV (.csv/.txt) and workbooks (.xlsx/.xlsm/.xls/.xlsb/.ods)
// Output: RawRow per data row, header order preserved
// Skips: empty-header columns, all-blank rows
// ==========================================

use crate::domain::candidate::{CellValue, RawRow};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

const UTF8_BOM: char = '\u{feff}';

/// Turns a file into raw rows
pub trait FileParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>>;
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(ImportError::FileNotFound(path.display().to_string()))
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Pair headers with cells, dropping columns whose header is empty
fn build_row<I>(headers: &[String], cells: I) -> RawRow
where
    I: IntoIterator<Item = CellValue>,
{
    headers
        .iter()
        .zip(cells)
        .filter(|(header, _)| !header.is_empty())
        .map(|(header, cell)| (header.clone(), cell))
        .collect()
}

// ==========================================
// CSV
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub const EXTENSIONS: [&'static str; 2] = ["csv", "txt"];

    /// Parse CSV text from any reader; cells stay text
    pub fn parse_reader<R: Read>(&self, reader: R) -> ImportResult<Vec<RawRow>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // rows may be shorter or longer than the header
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, h)| {
                let h = if idx == 0 { h.trim_start_matches(UTF8_BOM) } else { h };
                h.trim().to_string()
            })
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MissingHeader("CSV input".to_string()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row = build_row(
                &headers,
                record.iter().map(|v| CellValue::from(v.trim())),
            );

            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

impl FileParser for CsvParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !Self::EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let file = File::open(file_path)?;
        self.parse_reader(file)
    }
}

// ==========================================
// Workbooks
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub const EXTENSIONS: [&'static str; 5] = ["xlsx", "xlsm", "xls", "xlsb", "ods"];
}

/// Workbook cell → CellValue; dates keep their serial number, errors are blank
fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::Text(s.trim().to_string()),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::Float(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.trim().to_string()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}

impl FileParser for ExcelParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        ensure_exists(file_path)?;

        let ext = extension_of(file_path);
        if !Self::EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        let mut workbook = open_workbook_auto(file_path)?;

        // first sheet only
        let range = workbook
            .worksheet_range_at(0)
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))??;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::MissingHeader(file_path.display().to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| convert_cell(cell).to_display_string())
            .collect();

        if headers.iter().all(|h| h.is_empty()) {
            return Err(ImportError::MissingHeader(file_path.display().to_string()));
        }

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let row = build_row(&headers, data_row.iter().map(convert_cell));
            if row.is_blank() {
                continue;
            }
            rows.push(row);
        }

        debug!(rows = rows.len(), columns = headers.len(), "workbook parsed");
        Ok(rows)
    }
}

// ==========================================
// Dispatch on extension
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<Vec<RawRow>> {
        let path = file_path.as_ref();
        let ext = extension_of(path);

        if CsvParser::EXTENSIONS.contains(&ext.as_str()) {
            CsvParser.parse_to_raw_rows(path)
        } else if ExcelParser::EXTENSIONS.contains(&ext.as_str()) {
            ExcelParser.parse_to_raw_rows(path)
        } else {
            Err(ImportError::UnsupportedFormat(ext))
        }
    }
}

impl FileParser for UniversalFileParser {
    fn parse_to_raw_rows(&self, file_path: &Path) -> ImportResult<Vec<RawRow>> {
        self.parse(file_path)
    }
}
