// ==========================================
// Recruit Desk - candidate domain model
// ==========================================
// RawRow: one parsed spreadsheet row, column order preserved
// CandidateRecord: every canonical field present, "-" when unknown
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Marker for a canonical field that could not be resolved
pub const FIELD_FALLBACK: &str = "-";

// ==========================================
// CandidateField - canonical field keys
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateField {
    FullName,
    Phone,
    Age,
    Nationality,
    ResidencyStatus,
    JobAppliedFor,
    CurrentEmployment,
    Availability,
    MilitaryStatus,
    SocialStatus,
    YearsOfExperience,
    HajjExperience,
    HealthCard,
    LastSalary,
    Transportation,
    EnglishLevel,
    AcceptsRequirements,
    Housing,
    InterviewCity,
    Education,
}

impl CandidateField {
    pub const ALL: [CandidateField; 20] = [
        CandidateField::FullName,
        CandidateField::Phone,
        CandidateField::Age,
        CandidateField::Nationality,
        CandidateField::ResidencyStatus,
        CandidateField::JobAppliedFor,
        CandidateField::CurrentEmployment,
        CandidateField::Availability,
        CandidateField::MilitaryStatus,
        CandidateField::SocialStatus,
        CandidateField::YearsOfExperience,
        CandidateField::HajjExperience,
        CandidateField::HealthCard,
        CandidateField::LastSalary,
        CandidateField::Transportation,
        CandidateField::EnglishLevel,
        CandidateField::AcceptsRequirements,
        CandidateField::Housing,
        CandidateField::InterviewCity,
        CandidateField::Education,
    ];

    /// Stable key, matches the serde name
    pub fn key(&self) -> &'static str {
        match self {
            CandidateField::FullName => "fullName",
            CandidateField::Phone => "phone",
            CandidateField::Age => "age",
            CandidateField::Nationality => "nationality",
            CandidateField::ResidencyStatus => "residencyStatus",
            CandidateField::JobAppliedFor => "jobAppliedFor",
            CandidateField::CurrentEmployment => "currentEmployment",
            CandidateField::Availability => "availability",
            CandidateField::MilitaryStatus => "militaryStatus",
            CandidateField::SocialStatus => "socialStatus",
            CandidateField::YearsOfExperience => "yearsOfExperience",
            CandidateField::HajjExperience => "hajjExperience",
            CandidateField::HealthCard => "healthCard",
            CandidateField::LastSalary => "lastSalary",
            CandidateField::Transportation => "transportation",
            CandidateField::EnglishLevel => "englishLevel",
            CandidateField::AcceptsRequirements => "acceptsRequirements",
            CandidateField::Housing => "housing",
            CandidateField::InterviewCity => "interviewCity",
            CandidateField::Education => "education",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

// ==========================================
// CellValue - scalar spreadsheet cell
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Blank cells and whitespace-only text count as empty
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// String form of the cell.
    ///
    /// Floats print in their shortest decimal form, so a numeric `30.0` cell
    /// reads back as `"30"`.
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.trim().to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => format_float(*f),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Empty => String::new(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        // integral: no trailing ".0", and -0 prints as "0"
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

// ==========================================
// RawRow - ordered header → cell mapping
// ==========================================
// Headers are kept exactly as parsed (trimmed only) and in column order;
// duplicates are allowed, lookups see the first one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    cells: Vec<(String, CellValue)>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, header: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.push((header.into(), value.into()));
    }

    /// Builder form of `push`, handy for fixtures
    pub fn with(mut self, header: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.push(header, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(h, v)| (h.as_str(), v))
    }

    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(h, _)| h.as_str())
    }

    /// First cell under an exact (un-normalized) header
    pub fn get(&self, header: &str) -> Option<&CellValue> {
        self.cells.iter().find(|(h, _)| h == header).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// True when there are no cells or every cell is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, v)| v.is_blank())
    }
}

impl<H, V> FromIterator<(H, V)> for RawRow
where
    H: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (H, V)>>(iter: I) -> Self {
        Self {
            cells: iter
                .into_iter()
                .map(|(h, v)| (h.into(), v.into()))
                .collect(),
        }
    }
}

// ==========================================
// CandidateRecord
// ==========================================
// Only `notes` changes after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "StoredCandidate")]
pub struct CandidateRecord {
    pub id: String,
    values: BTreeMap<CandidateField, String>,
    pub notes: String,
}

impl CandidateRecord {
    /// New record with every field set to the fallback marker
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            values: CandidateField::ALL
                .into_iter()
                .map(|f| (f, FIELD_FALLBACK.to_string()))
                .collect(),
            notes: String::new(),
        }
    }

    /// Set one field; blank values are stored as the fallback marker
    pub fn set(&mut self, field: CandidateField, value: impl Into<String>) {
        let value = value.into();
        let value = if value.trim().is_empty() {
            FIELD_FALLBACK.to_string()
        } else {
            value
        };
        self.values.insert(field, value);
    }

    pub fn with(mut self, field: CandidateField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn get(&self, field: CandidateField) -> &str {
        self.values
            .get(&field)
            .map(String::as_str)
            .unwrap_or(FIELD_FALLBACK)
    }

    pub fn is_resolved(&self, field: CandidateField) -> bool {
        self.get(field) != FIELD_FALLBACK
    }

    pub fn full_name(&self) -> &str {
        self.get(CandidateField::FullName)
    }

    pub fn phone(&self) -> &str {
        self.get(CandidateField::Phone)
    }

    /// Fields in catalog order
    pub fn fields(&self) -> impl Iterator<Item = (CandidateField, &str)> {
        CandidateField::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Serialized shape; missing fields are filled back in on load
#[derive(Deserialize)]
struct StoredCandidate {
    id: String,
    #[serde(default)]
    values: BTreeMap<CandidateField, String>,
    #[serde(default)]
    notes: String,
}

impl From<StoredCandidate> for CandidateRecord {
    fn from(stored: StoredCandidate) -> Self {
        let mut record = CandidateRecord::new(stored.id);
        for (field, value) in stored.values {
            record.set(field, value);
        }
        record.notes = stored.notes;
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_fully_populated() {
        let record = CandidateRecord::new("c1");
        assert_eq!(record.fields().count(), CandidateField::ALL.len());
        assert!(record.fields().all(|(_, v)| v == FIELD_FALLBACK));
    }

    #[test]
    fn test_set_blank_keeps_marker() {
        let record = CandidateRecord::new("c1")
            .with(CandidateField::FullName, "Sara")
            .with(CandidateField::Phone, "   ");
        assert_eq!(record.full_name(), "Sara");
        assert_eq!(record.phone(), FIELD_FALLBACK);
        assert!(!record.is_resolved(CandidateField::Phone));
    }

    #[test]
    fn test_partial_json_is_filled_on_load() {
        let json = r#"{"id":"c9","values":{"fullName":"Ali"},"notes":"call later"}"#;
        let record: CandidateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.full_name(), "Ali");
        assert_eq!(record.get(CandidateField::Education), FIELD_FALLBACK);
        assert_eq!(record.notes, "call later");
        assert_eq!(record.fields().count(), 20);
    }

    #[test]
    fn test_cell_value_display() {
        assert_eq!(CellValue::Float(30.0).to_display_string(), "30");
        assert_eq!(CellValue::Float(2.5).to_display_string(), "2.5");
        assert_eq!(CellValue::Int(966).to_display_string(), "966");
        assert_eq!(CellValue::Bool(true).to_display_string(), "true");
        assert_eq!(CellValue::from("  Ali ").to_display_string(), "Ali");
        assert!(CellValue::Empty.is_blank());
        assert!(CellValue::from("  ").is_blank());
    }

    #[test]
    fn test_raw_row_keeps_order_and_duplicates() {
        let row = RawRow::new()
            .with("Name", "first")
            .with("Age", 30_i64)
            .with("Name", "second");
        let headers: Vec<&str> = row.headers().collect();
        assert_eq!(headers, vec!["Name", "Age", "Name"]);
        assert_eq!(row.get("Name"), Some(&CellValue::from("first")));
    }

    #[test]
    fn test_field_key_lookup() {
        for field in CandidateField::ALL {
            assert_eq!(CandidateField::from_key(field.key()), Some(field));
        }
        assert_eq!(CandidateField::from_key("unknown"), None);
    }
}
