// ==========================================
// Recruit Desk - message template model
// ==========================================
// Placeholder: closed set of `{token}` names
// MessageTemplate: one per MessageKind, Arabic + English body
// RenderContext: placeholder → value for a single render
// ==========================================

use crate::domain::types::{Language, MessageKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ==========================================
// Placeholder
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placeholder {
    Name,
    Place,
    Date,
    Day,
    Time,
    LocationLink,
    FormLink,
    Position,
}

impl Placeholder {
    pub const ALL: [Placeholder; 8] = [
        Placeholder::Name,
        Placeholder::Place,
        Placeholder::Date,
        Placeholder::Day,
        Placeholder::Time,
        Placeholder::LocationLink,
        Placeholder::FormLink,
        Placeholder::Position,
    ];

    /// Token name as written between braces in a body
    pub fn name(&self) -> &'static str {
        match self {
            Placeholder::Name => "name",
            Placeholder::Place => "place",
            Placeholder::Date => "date",
            Placeholder::Day => "day",
            Placeholder::Time => "time",
            Placeholder::LocationLink => "location_link",
            Placeholder::FormLink => "form_link",
            Placeholder::Position => "position",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    /// `{name}` form
    pub fn token(&self) -> String {
        format!("{{{}}}", self.name())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// LocalizedText
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LocalizedText {
    pub ar: &'static str,
    pub en: &'static str,
}

impl LocalizedText {
    pub const fn new(ar: &'static str, en: &'static str) -> Self {
        Self { ar, en }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Ar => self.ar,
            Language::En => self.en,
        }
    }
}

// ==========================================
// MessageTemplate
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MessageTemplate {
    pub kind: MessageKind,
    /// Placeholders the template is declared to use
    pub placeholders: &'static [Placeholder],
    pub body: LocalizedText,
}

impl MessageTemplate {
    pub fn body(&self, language: Language) -> &'static str {
        self.body.get(language)
    }

    /// Distinct placeholders that actually occur in the body, in first-occurrence order
    pub fn referenced_placeholders(&self, language: Language) -> Vec<Placeholder> {
        let mut found = Vec::new();
        for placeholder in crate::engine::template_engine::scan_placeholders(self.body(language)) {
            if !found.contains(&placeholder) {
                found.push(placeholder);
            }
        }
        found
    }
}

// ==========================================
// RenderContext
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderContext {
    values: BTreeMap<Placeholder, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, placeholder: Placeholder, value: impl Into<String>) {
        self.values.insert(placeholder, value.into());
    }

    pub fn with(mut self, placeholder: Placeholder, value: impl Into<String>) -> Self {
        self.set(placeholder, value);
        self
    }

    pub fn remove(&mut self, placeholder: Placeholder) -> Option<String> {
        self.values.remove(&placeholder)
    }

    /// Value if present and non-empty
    pub fn value(&self, placeholder: Placeholder) -> Option<&str> {
        self.values
            .get(&placeholder)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
