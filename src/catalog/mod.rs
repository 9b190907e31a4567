// ==========================================
// Recruit Desk - static catalogs
// ==========================================
// Canonical fields, message templates and composer lookups.
// Defined once, never mutated.
// ==========================================

pub mod fields;
pub mod lookups;
pub mod templates;

pub use fields::{CanonicalField, CANDIDATE_FIELDS};
pub use lookups::{
    day_label, find_location, time_slots, Location, TimeSlot, DAYS, DEFAULT_FORM_LINK,
    DEFAULT_POSITION, LOCATIONS,
};
pub use templates::{template_for, TEMPLATES};
