//! Locale registry: single source of truth for all supported locales.
//!
//! The registry is built once behind a `OnceLock` and is read-only afterwards,
//! so any number of request handlers can query it without synchronization.
//! It owns the locale-tag normalization rules and the shared text fallback
//! chain every taxonomy uses when rendering display text.

use crate::i18n::locale::family_prefix;
use crate::i18n::{Locale, LookupMetrics};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::sync::OnceLock;
use tracing::debug;

/// Configuration for a supported locale.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// The locale this entry describes
    pub locale: Locale,

    /// English name of the locale (e.g. "Spanish (Spain)")
    pub name: &'static str,

    /// Native name of the locale (e.g. "Español (España)")
    pub native_name: &'static str,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,
}

/// Outcome of matching raw client input against the supported locales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocaleMatch {
    /// The cleaned input is a supported canonical tag.
    Exact(Locale),
    /// Only the family prefix matched (e.g. `es-MX` -> `es_es`).
    Family(Locale),
    /// Nothing matched; the default locale is used.
    Defaulted,
}

impl LocaleMatch {
    /// The locale callers should use for this match.
    pub fn locale(self) -> Locale {
        match self {
            LocaleMatch::Exact(locale) | LocaleMatch::Family(locale) => locale,
            LocaleMatch::Defaulted => Locale::DEFAULT,
        }
    }
}

/// Which step of the fallback chain produced a display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackStep {
    /// Text stored under the exact locale tag.
    Exact,
    /// Text stored under the locale's family prefix.
    Family,
    /// Text stored under the default locale.
    Default,
    /// First non-empty text found in the mapping.
    Any,
}

/// Global locale registry singleton.
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    by_tag: HashMap<&'static str, Locale>,
    by_family: HashMap<&'static str, Locale>,
    client_formats: Vec<String>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Get the global locale registry instance.
    ///
    /// # Panics
    /// Panics on first access if the built-in locale table does not have
    /// exactly one default locale.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| LocaleRegistry::new(default_locales()))
    }

    fn new(locales: Vec<LocaleConfig>) -> Self {
        match locales.iter().filter(|config| config.is_default).count() {
            1 => {}
            0 => panic!("No default locale found in registry"),
            _ => panic!("Multiple default locales found in registry"),
        }

        let by_tag = locales
            .iter()
            .map(|config| (config.locale.tag(), config.locale))
            .collect();

        // First locale declared for a family wins the family prefix.
        let mut by_family = HashMap::new();
        for config in &locales {
            by_family
                .entry(config.locale.family())
                .or_insert(config.locale);
        }

        let client_formats = locales
            .iter()
            .map(|config| config.locale.client_format())
            .collect();

        debug!(
            locales = locales.len(),
            families = by_family.len(),
            "Locale registry initialized"
        );

        Self {
            locales,
            by_tag,
            by_family,
            client_formats,
        }
    }

    /// Get the configuration of a supported locale.
    pub fn config(&self, locale: Locale) -> &LocaleConfig {
        self.locales
            .iter()
            .find(|config| config.locale == locale)
            .unwrap_or_else(|| panic!("Locale {} missing from registry", locale.tag()))
    }

    /// Get all locale configurations in registry order.
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Get the default locale configuration.
    pub fn default_config(&self) -> &LocaleConfig {
        self.config(Locale::DEFAULT)
    }

    /// Look up a canonical tag exactly (no cleanup, no fallback).
    pub fn get_by_tag(&self, tag: &str) -> Option<Locale> {
        self.by_tag.get(tag).copied()
    }

    /// Match raw client input against the supported locales.
    ///
    /// The input is trimmed, lower-cased and `-` becomes `_`. Then the exact
    /// tag is tried, then the family prefix (text before the first `_`).
    pub fn match_locale(&self, input: &str) -> LocaleMatch {
        let key = clean_locale_key(input);

        if let Some(&locale) = self.by_tag.get(key.as_str()) {
            return LocaleMatch::Exact(locale);
        }

        if let Some(&locale) = self.by_family.get(family_prefix(&key)) {
            return LocaleMatch::Family(locale);
        }

        LocaleMatch::Defaulted
    }

    /// Convert client input (`"pt-BR"`, `"en"`, `"es_MX"`) to a supported locale.
    ///
    /// Never fails: unsupported or malformed input degrades to the default.
    pub fn normalize_locale(&self, input: &str) -> Locale {
        let matched = self.match_locale(input);
        if matched == LocaleMatch::Defaulted {
            debug!(input, "Unsupported locale, using default");
        }
        matched.locale()
    }

    /// Check if client input names a supported locale.
    ///
    /// True when the input normalizes to a non-default locale, or when the
    /// cleaned input is literally the default tag. A family-only match on the
    /// default's family (e.g. `"pt"`) is reported as unsupported; use
    /// [`LocaleRegistry::match_locale`] to tell those cases apart.
    pub fn is_locale_supported(&self, input: &str) -> bool {
        match self.match_locale(input) {
            LocaleMatch::Exact(_) => true,
            LocaleMatch::Family(locale) => !locale.is_default(),
            LocaleMatch::Defaulted => false,
        }
    }

    /// Render a locale in client format (e.g. `pt_br` -> `"pt-BR"`).
    pub fn format_for_client(&self, locale: Locale) -> String {
        locale.client_format()
    }

    /// All supported locales in client format, in registry order.
    ///
    /// Computed once when the registry is built.
    pub fn list_supported_client_formats(&self) -> &[String] {
        &self.client_formats
    }

    /// Pick the best display text for `locale` out of a locale-keyed mapping.
    ///
    /// Order: exact tag, family prefix, default tag, then any non-empty value.
    /// Returns `""` only if the mapping has no non-empty value at all.
    pub fn resolve_text<'a, K, V, S>(&self, candidates: &'a HashMap<K, V, S>, locale: Locale) -> &'a str
    where
        K: Borrow<str> + Eq + Hash,
        V: AsRef<str>,
        S: BuildHasher,
    {
        let metrics = LookupMetrics::global();
        match self.resolve_text_with_step(candidates, locale) {
            Some((text, step)) => {
                metrics.record_fallback(step);
                text
            }
            None => {
                metrics.record_missing_text();
                ""
            }
        }
    }

    /// Same as [`LocaleRegistry::resolve_text`], also reporting which step answered.
    pub fn resolve_text_with_step<'a, K, V, S>(
        &self,
        candidates: &'a HashMap<K, V, S>,
        locale: Locale,
    ) -> Option<(&'a str, FallbackStep)>
    where
        K: Borrow<str> + Eq + Hash,
        V: AsRef<str>,
        S: BuildHasher,
    {
        if candidates.is_empty() {
            return None;
        }

        if let Some(text) = non_empty(candidates, locale.tag()) {
            return Some((text, FallbackStep::Exact));
        }

        if let Some(text) = non_empty(candidates, locale.family()) {
            return Some((text, FallbackStep::Family));
        }

        if let Some(text) = non_empty(candidates, Locale::DEFAULT.tag()) {
            return Some((text, FallbackStep::Default));
        }

        candidates
            .values()
            .map(|text| text.as_ref())
            .find(|text| !text.is_empty())
            .map(|text| (text, FallbackStep::Any))
    }
}

fn non_empty<'a, K, V, S>(candidates: &'a HashMap<K, V, S>, key: &str) -> Option<&'a str>
where
    K: Borrow<str> + Eq + Hash,
    V: AsRef<str>,
    S: BuildHasher,
{
    candidates
        .get(key)
        .map(|text| text.as_ref())
        .filter(|text| !text.is_empty())
}

/// Trim, lower-case and turn `-` into `_`.
fn clean_locale_key(input: &str) -> String {
    input.trim().to_lowercase().replace('-', "_")
}

/// Built-in locale configurations.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            locale: Locale::PtBr,
            name: "Portuguese (Brazil)",
            native_name: "Português (Brasil)",
            is_default: true,
        },
        LocaleConfig {
            locale: Locale::EnUs,
            name: "English (United States)",
            native_name: "English (United States)",
            is_default: false,
        },
        LocaleConfig {
            locale: Locale::EsEs,
            name: "Spanish (Spain)",
            native_name: "Español (España)",
            is_default: false,
        },
    ]
}
