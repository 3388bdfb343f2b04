//! Translation table validation module.
//!
//! Taxonomy tables are static data compiled into the binary. This module
//! checks them when they are loaded so that a broken entry (a value with no
//! default text, a misspelled locale key) is reported once at startup
//! instead of showing up as an odd label in some client's catalog.

use crate::i18n::{Locale, LocaleRegistry};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make the table unusable
    pub errors: Vec<String>,

    /// Problems the fallback chain papers over
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for taxonomy translation tables.
pub struct TableValidator;

// Canonical tag (`pt_br`) or bare family prefix (`pt`)
static LOCALE_KEY_REGEX: OnceLock<Regex> = OnceLock::new();

fn locale_key_regex() -> &'static Regex {
    LOCALE_KEY_REGEX.get_or_init(|| Regex::new(r"^[a-z]{2,3}(_[a-z0-9]{2,8})?$").unwrap())
}

impl TableValidator {
    /// Validate a taxonomy's translation table.
    ///
    /// Errors:
    /// - slugs that are empty or not already trimmed and lower-case
    /// - locale keys that are not well-formed tags
    /// - values without a non-empty default-locale text
    ///
    /// Warnings:
    /// - supported locales missing from a value (they will fall back)
    /// - keys that no supported locale will ever ask for
    /// - empty texts under a non-default key
    ///
    /// # Arguments
    /// * `kind` - Taxonomy name used in messages (e.g. "genre")
    /// * `entries` - `(slug, texts by locale key)` for every value
    pub fn validate<'a, I, S>(kind: &str, entries: I) -> ValidationReport
    where
        I: IntoIterator<Item = (S, &'a HashMap<&'static str, &'static str>)>,
        S: AsRef<str>,
    {
        let mut report = ValidationReport::new();
        let registry = LocaleRegistry::get();

        for (slug, texts) in entries {
            let slug = slug.as_ref();
            if slug.is_empty() {
                report.errors.push(format!("{} with an empty slug", kind));
                continue;
            }
            if slug.trim().to_lowercase() != slug {
                report.errors.push(format!(
                    "{} slug '{}' must be trimmed and lower-case",
                    kind, slug
                ));
            }

            for (&key, &text) in texts {
                if !locale_key_regex().is_match(key) {
                    report.errors.push(format!(
                        "{} '{}' has malformed locale key '{}'",
                        kind, slug, key
                    ));
                    continue;
                }

                let reachable = registry.get_by_tag(key).is_some()
                    || Locale::ALL.iter().any(|locale| locale.family() == key);
                if !reachable {
                    report.warnings.push(format!(
                        "{} '{}' has text for unsupported locale '{}'",
                        kind, slug, key
                    ));
                }

                if text.trim().is_empty() && key != Locale::DEFAULT.tag() {
                    report.warnings.push(format!(
                        "{} '{}' has empty text for '{}'",
                        kind, slug, key
                    ));
                }
            }

            let has_default = texts
                .get(Locale::DEFAULT.tag())
                .is_some_and(|text| !text.trim().is_empty());
            if !has_default {
                report.errors.push(format!(
                    "{} '{}' has no {} text",
                    kind,
                    slug,
                    Locale::DEFAULT.tag()
                ));
            }

            for locale in Locale::ALL.iter().filter(|locale| !locale.is_default()) {
                if !texts.contains_key(locale.tag()) {
                    report.warnings.push(format!(
                        "{} '{}' has no {} text, falls back",
                        kind,
                        slug,
                        locale.tag()
                    ));
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(pairs: &[(&'static str, &'static str)]) -> HashMap<&'static str, &'static str> {
        pairs.iter().copied().collect()
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_new_is_clean() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_report_default() {
        assert_eq!(ValidationReport::default(), ValidationReport::new());
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_complete_entry_is_clean() {
        let action = texts(&[("pt_br", "Ação"), ("en_us", "Action"), ("es_es", "Acción")]);
        let report = TableValidator::validate("genre", [("action", &action)]);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_missing_default_is_error() {
        let action = texts(&[("en_us", "Action"), ("es_es", "Acción")]);
        let report = TableValidator::validate("genre", [("action", &action)]);

        assert!(report.has_errors());
        assert!(report.errors[0].contains("no pt_br text"));
    }

    #[test]
    fn test_empty_default_is_error() {
        let action = texts(&[("pt_br", "  "), ("en_us", "Action"), ("es_es", "Acción")]);
        let report = TableValidator::validate("genre", [("action", &action)]);
        assert!(report.has_errors());
    }

    #[test]
    fn test_missing_other_locale_is_warning() {
        let action = texts(&[("pt_br", "Ação")]);
        let report = TableValidator::validate("genre", [("action", &action)]);

        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings.iter().any(|w| w.contains("en_us")));
    }

    #[test]
    fn test_family_key_is_reachable() {
        let summer = texts(&[("pt_br", "Verão"), ("en_us", "Summer"), ("es", "Verano")]);
        let report = TableValidator::validate("season", [("summer", &summer)]);

        assert!(!report.has_errors());
        assert!(!report.warnings.iter().any(|w| w.contains("unsupported")));
    }

    #[test]
    fn test_unsupported_locale_key_is_warning() {
        let summer = texts(&[
            ("pt_br", "Verão"),
            ("en_us", "Summer"),
            ("es_es", "Verano"),
            ("fr_fr", "Été"),
        ]);
        let report = TableValidator::validate("season", [("summer", &summer)]);

        assert!(!report.has_errors());
        assert!(report.warnings[0].contains("fr_fr"));
    }

    #[test]
    fn test_malformed_locale_key_is_error() {
        let summer = texts(&[("pt_br", "Verão"), ("en-US", "Summer"), ("es_es", "Verano")]);
        let report = TableValidator::validate("season", [("summer", &summer)]);
        assert!(report.errors.iter().any(|e| e.contains("malformed")));
    }

    #[test]
    fn test_slug_must_be_lower_case() {
        let drama = texts(&[("pt_br", "Drama"), ("en_us", "Drama"), ("es_es", "Drama")]);
        let report = TableValidator::validate("genre", [("Drama", &drama)]);
        assert!(report.errors[0].contains("lower-case"));
    }

    #[test]
    fn test_empty_slug_is_error() {
        let drama = texts(&[("pt_br", "Drama")]);
        let report = TableValidator::validate("genre", [("", &drama)]);
        assert_eq!(report.errors.len(), 1);
    }
}
