// ==========================================
// Recruit Desk - field resolver
// ==========================================
// Responsibility: spreadsheet header → canonical candidate field
// Matching: exact pass → partial (containment) pass → "-"
// Tie-break: first header in column order, never "best" match
// ==========================================

use crate::catalog::fields::CanonicalField;
use crate::domain::candidate::{CandidateField, CandidateRecord, RawRow, FIELD_FALLBACK};
use tracing::debug;

// ==========================================
// Normalization
// ==========================================

/// Arabic diacritics (tashkeel and Quranic annotation marks)
fn is_arabic_diacritic(c: char) -> bool {
    matches!(c,
        '\u{0610}'..='\u{061A}'
        | '\u{064B}'..='\u{065F}'
        | '\u{0670}'
        | '\u{06D6}'..='\u{06DC}'
        | '\u{06DF}'..='\u{06E8}'
        | '\u{06EA}'..='\u{06ED}'
    )
}

/// Normalize a header or keyword for comparison: drop Arabic diacritics,
/// lowercase, trim.
///
/// Diacritics go first so a trailing mark cannot shield whitespace from the
/// trim; that keeps `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(s: &str) -> String {
    let stripped: String = s.chars().filter(|c| !is_arabic_diacritic(*c)).collect();
    stripped.to_lowercase().trim().to_string()
}

// ==========================================
// How a lookup was satisfied
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Partial,
    Unmatched,
}

/// Outcome of one lookup, with the header that won (if any)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub value: String,
    pub header: Option<String>,
    pub match_kind: MatchKind,
}

impl Resolution {
    fn unmatched() -> Self {
        Self {
            value: FIELD_FALLBACK.to_string(),
            header: None,
            match_kind: MatchKind::Unmatched,
        }
    }
}

// ==========================================
// resolve
// ==========================================

/// Resolve one canonical field from a row.
///
/// `keywords` is the field's alias list. Returns the cell value as a string,
/// or `"-"` when nothing matches. Never fails.
pub fn resolve(row: &RawRow, keywords: &[&str]) -> String {
    resolve_detailed(row, keywords).value
}

/// Same as [`resolve`], also reporting which header won and how
pub fn resolve_detailed(row: &RawRow, keywords: &[&str]) -> Resolution {
    let normalized_keywords: Vec<String> = keywords.iter().map(|k| normalize(k)).collect();
    let normalized_headers: Vec<String> = row.headers().map(normalize).collect();

    // Exact pass
    for ((header, cell), norm_header) in row.iter().zip(&normalized_headers) {
        if normalized_keywords.iter().any(|k| k == norm_header) {
            return Resolution {
                value: cell_value(cell),
                header: Some(header.to_string()),
                match_kind: MatchKind::Exact,
            };
        }
    }

    // Partial pass (bidirectional containment); empty strings never count
    for ((header, cell), norm_header) in row.iter().zip(&normalized_headers) {
        if norm_header.is_empty() {
            continue;
        }
        let hit = normalized_keywords.iter().find(|k| {
            !k.is_empty() && (norm_header.contains(k.as_str()) || k.contains(norm_header.as_str()))
        });
        if let Some(keyword) = hit {
            debug!(
                header = %header,
                keyword = %keyword,
                "partial header match"
            );
            return Resolution {
                value: cell_value(cell),
                header: Some(header.to_string()),
                match_kind: MatchKind::Partial,
            };
        }
    }

    debug!(keywords = ?keywords, "no header matched");
    Resolution::unmatched()
}

fn cell_value(cell: &crate::domain::candidate::CellValue) -> String {
    if cell.is_blank() {
        FIELD_FALLBACK.to_string()
    } else {
        cell.to_display_string()
    }
}

// ==========================================
// FieldResolver - whole-record resolution
// ==========================================

/// Resolves every canonical field of a catalog against one row
#[derive(Debug, Clone, Copy)]
pub struct FieldResolver {
    catalog: &'static [CanonicalField],
}

/// A resolved record plus the fields that fell back to "-"
#[derive(Debug, Clone)]
pub struct ResolvedCandidate {
    pub record: CandidateRecord,
    pub unresolved: Vec<CandidateField>,
    pub partial: Vec<CandidateField>,
}

impl Default for FieldResolver {
    fn default() -> Self {
        Self::new(&crate::catalog::fields::CANDIDATE_FIELDS)
    }
}

impl FieldResolver {
    pub fn new(catalog: &'static [CanonicalField]) -> Self {
        Self { catalog }
    }

    /// Build a full CandidateRecord from a row
    pub fn resolve_record(&self, row: &RawRow, id: impl Into<String>) -> ResolvedCandidate {
        let mut record = CandidateRecord::new(id);
        let mut unresolved = Vec::new();
        let mut partial = Vec::new();

        for field in self.catalog {
            let resolution = resolve_detailed(row, field.aliases);
            match resolution.match_kind {
                MatchKind::Unmatched => unresolved.push(field.key),
                MatchKind::Partial => partial.push(field.key),
                MatchKind::Exact => {}
            }
            record.set(field.key, resolution.value);
        }

        ResolvedCandidate {
            record,
            unresolved,
            partial,
        }
    }
}
