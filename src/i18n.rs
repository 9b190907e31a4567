// ==========================================
// Localization (i18n)
// ==========================================
// rust-i18n; Arabic (default) and English
// Locale files: locales/ar.yml, locales/en.yml
// ==========================================
// Note: rust_i18n::i18n! is invoked in lib.rs
// ==========================================

use crate::domain::types::Language;

pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Set the process-wide locale ("ar" or "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate with the process-wide locale
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate for an explicit language; the global locale is untouched
///
/// # Example
/// ```no_run
/// use recruit_desk::domain::Language;
/// use recruit_desk::i18n::t_in;
/// let label = t_in("kind.interview", Language::En);
/// ```
pub fn t_in(key: &str, language: Language) -> String {
    rust_i18n::t!(key, locale = language.code()).to_string()
}

/// Translate for an explicit language and fill `%{name}` arguments
pub fn t_in_with_args(key: &str, language: Language, args: &[(&str, &str)]) -> String {
    let mut result = t_in(key, language);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}
