// ==========================================
// Recruit Desk - template engine
// ==========================================
// Responsibility: substitute `{placeholder}` tokens in a template body
// One left-to-right pass; substituted text is never rescanned
// Unknown tokens and stray braces are copied as-is
// ==========================================

use crate::domain::message::{MessageTemplate, Placeholder, RenderContext};
use crate::domain::types::Language;

/// Shown in place of a placeholder that has no value
pub const UNRESOLVED_PLACEHOLDER: &str = "______";

/// Piece of a parsed body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    Token(Placeholder),
}

/// Split a body into literal runs and known placeholder tokens.
///
/// A `{` only opens a token when the text up to the next `}` is a known
/// placeholder name; otherwise the `{` is literal and scanning resumes right
/// after it, so `{{name}` yields `{` followed by the `name` token.
fn segments(body: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = body[cursor..].find('{') {
        let open = cursor + offset;
        let after_open = open + 1;

        let token = body[after_open..].find('}').and_then(|len| {
            Placeholder::from_name(&body[after_open..after_open + len])
                .map(|p| (p, after_open + len + 1))
        });

        match token {
            Some((placeholder, end)) => {
                if literal_start < open {
                    out.push(Segment::Literal(&body[literal_start..open]));
                }
                out.push(Segment::Token(placeholder));
                literal_start = end;
                cursor = end;
            }
            None => cursor = after_open,
        }
    }

    if literal_start < body.len() {
        out.push(Segment::Literal(&body[literal_start..]));
    }
    out
}

/// Known placeholders in a body, every occurrence, in order
pub fn scan_placeholders(body: &str) -> Vec<Placeholder> {
    segments(body)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Token(p) => Some(p),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Render a raw body against a context
pub fn render_text(body: &str, context: &RenderContext) -> String {
    let mut out = String::with_capacity(body.len());
    for segment in segments(body) {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Token(placeholder) => {
                out.push_str(context.value(placeholder).unwrap_or(UNRESOLVED_PLACEHOLDER))
            }
        }
    }
    out
}

/// Render a template in the given language.
///
/// # Returns
/// The body with every known placeholder replaced by its context value, or by
/// [`UNRESOLVED_PLACEHOLDER`] when the value is missing or empty.
pub fn render(template: &MessageTemplate, language: Language, context: &RenderContext) -> String {
    render_text(template.body(language), context)
}
