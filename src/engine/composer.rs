// ==========================================
// Recruit Desk - message composer
// ==========================================
// Responsibility:
// - compose form defaults and placeholder context
// - preview rendering
// - phone normalization and wa.me deep link
// - dispatch preparation (text + link + log entry)
// ==========================================

use crate::catalog::lookups::{day_label, find_location, time_slots, DAYS, DEFAULT_FORM_LINK, DEFAULT_POSITION, LOCATIONS};
use crate::catalog::templates::template_for;
use crate::domain::message::{Placeholder, RenderContext};
use crate::domain::message_log::{MessageLogEntry, SendStatus};
use crate::domain::types::{Language, MessageKind};
use crate::engine::template_engine::render;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

const WHATSAPP_BASE_URL: &str = "https://wa.me/";
const SAUDI_COUNTRY_CODE: &str = "966";

/// Characters encodeURIComponent leaves alone: A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

// ==========================================
// ComposeError
// ==========================================
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("candidate name and phone number are required")]
    MissingRecipient,
}

// ==========================================
// ComposeForm
// ==========================================

/// Everything the operator fills in before sending.
///
/// `date`, `day` and `time` are kept as the text that goes into the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposeForm {
    pub kind: MessageKind,
    pub name: String,
    pub phone: String,
    pub form_link: String,
    pub location_id: String,
    pub date: String,
    pub day: String,
    pub time: String,
    pub position: String,
    pub notes: String,
}

impl ComposeForm {
    /// Form with the composer's starting values
    pub fn new(language: Language, today: NaiveDate) -> Self {
        let first_slot = time_slots()
            .first()
            .map(|slot| slot.label(language))
            .unwrap_or_default();

        Self {
            kind: MessageKind::Interview,
            name: String::new(),
            phone: String::new(),
            form_link: DEFAULT_FORM_LINK.to_string(),
            location_id: LOCATIONS[0].id.to_string(),
            date: today.format("%Y-%m-%d").to_string(),
            day: DAYS[0].get(language).to_string(),
            time: first_slot,
            position: DEFAULT_POSITION.get(language).to_string(),
            notes: String::new(),
        }
    }

    pub fn with_kind(mut self, kind: MessageKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_recipient(mut self, name: impl Into<String>, phone: impl Into<String>) -> Self {
        self.name = name.into();
        self.phone = phone.into();
        self
    }

    pub fn with_location(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = location_id.into();
        self
    }

    /// Set the date and the matching week day label
    pub fn with_date(mut self, date: NaiveDate, language: Language) -> Self {
        self.date = date.format("%Y-%m-%d").to_string();
        self.day = day_label(date.weekday(), language).to_string();
        self
    }
}

// ==========================================
// Context + preview
// ==========================================

/// Placeholder values for the form.
///
/// An unknown location id leaves `place` and `location_link` unset, so they
/// render as the unresolved marker.
pub fn build_context(form: &ComposeForm, language: Language) -> RenderContext {
    let mut ctx = RenderContext::new()
        .with(Placeholder::Name, form.name.trim())
        .with(Placeholder::Date, form.date.as_str())
        .with(Placeholder::Day, form.day.as_str())
        .with(Placeholder::Time, form.time.as_str())
        .with(Placeholder::FormLink, form.form_link.trim())
        .with(Placeholder::Position, form.position.trim());

    match find_location(&form.location_id) {
        Some(location) => {
            ctx.set(Placeholder::Place, location.name.get(language));
            ctx.set(Placeholder::LocationLink, location.link);
        }
        None => debug!(location_id = %form.location_id, "unknown location id"),
    }

    ctx
}

/// Message text as it will be sent
pub fn preview(form: &ComposeForm, language: Language) -> String {
    render(template_for(form.kind), language, &build_context(form, language))
}

// ==========================================
// Phone + deep link
// ==========================================

/// Digits only; a local `05…` mobile number gets the 966 country code
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    match digits.strip_prefix('0') {
        Some(rest) if rest.starts_with('5') => format!("{}{}", SAUDI_COUNTRY_CODE, rest),
        _ => digits,
    }
}

/// `https://wa.me/<phone>?text=<encoded text>`
pub fn whatsapp_link(phone: &str, text: &str) -> String {
    format!(
        "{}{}?text={}",
        WHATSAPP_BASE_URL,
        phone,
        utf8_percent_encode(text, URI_COMPONENT)
    )
}

// ==========================================
// Dispatch
// ==========================================

/// Ready-to-send message
#[derive(Debug, Clone, PartialEq)]
pub struct Dispatch {
    pub text: String,
    pub link: String,
    pub entry: MessageLogEntry,
}

/// Validate the form and build the text, link and log entry.
///
/// # Errors
/// `ComposeError::MissingRecipient` when the name is blank or the phone has no digits.
pub fn prepare_dispatch(
    form: &ComposeForm,
    language: Language,
    sender: &str,
    now: NaiveDateTime,
) -> Result<Dispatch, ComposeError> {
    let name = form.name.trim();
    let phone = normalize_phone(&form.phone);
    if name.is_empty() || phone.is_empty() {
        return Err(ComposeError::MissingRecipient);
    }

    let text = preview(form, language);
    let link = whatsapp_link(&phone, &text);

    let details = match form.kind {
        MessageKind::InfoCollection => form.position.trim().to_string(),
        _ => find_location(&form.location_id)
            .map(|l| l.name.get(language).to_string())
            .unwrap_or_default(),
    };

    let entry = MessageLogEntry {
        id: Uuid::new_v4().to_string(),
        timestamp: now,
        kind: form.kind,
        candidate_name: name.to_string(),
        phone,
        details,
        status: SendStatus::Sent,
        language,
        sender: sender.to_string(),
        notes: form.notes.trim().to_string(),
    };

    info!(
        kind = %entry.kind,
        phone = %entry.phone,
        sender = %entry.sender,
        "message prepared"
    );

    Ok(Dispatch { text, link, entry })
}
