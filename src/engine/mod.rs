// ==========================================
// Recruit Desk - engine layer
// ==========================================
// Responsibility: header resolution, template rendering, message composition
// Rule: engines are pure; no SQL, no file IO, no global state
// ==========================================

pub mod composer;
pub mod field_resolver;
pub mod template_engine;

// Re-exports
pub use composer::{
    build_context, normalize_phone, prepare_dispatch, preview, whatsapp_link, ComposeError,
    ComposeForm, Dispatch,
};
pub use field_resolver::{
    normalize, resolve, resolve_detailed, FieldResolver, MatchKind, Resolution, ResolvedCandidate,
};
pub use template_engine::{render, render_text, scan_placeholders, UNRESOLVED_PLACEHOLDER};
