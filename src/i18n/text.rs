//! Locale-keyed text blobs.
//!
//! Entity names and synopses are stored as a JSON object keyed by canonical
//! locale tag (`{"pt_br": "...", "en_us": "..."}`). `LocalizedText` is that
//! blob, with keys canonicalized on the way in and the registry's fallback
//! chain on the way out.

use crate::i18n::{Locale, LocaleMatch, LocaleRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Display text for an entity in several locales.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalizedText(HashMap<String, String>);

impl LocalizedText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from client input, canonicalizing every key.
    ///
    /// `"pt-BR"` and `"PT_br"` both land on `pt_br`, `"es"` lands on `es_es`.
    /// Keys that match no supported locale are dropped, never stored under
    /// the default. Blank texts are ignored. An exact tag beats a family match
    /// for the same locale regardless of order; between keys of the same rank
    /// the later one wins.
    pub fn from_client<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let registry = LocaleRegistry::get();
        let mut picked: HashMap<Locale, (bool, String)> = HashMap::new();

        for (key, value) in entries {
            let key = key.as_ref();
            let value = value.into();
            if value.trim().is_empty() {
                continue;
            }

            let (locale, exact) = match registry.match_locale(key) {
                LocaleMatch::Exact(locale) => (locale, true),
                LocaleMatch::Family(locale) => (locale, false),
                LocaleMatch::Defaulted => {
                    debug!(key, "Dropping text for unsupported locale");
                    continue;
                }
            };

            match picked.get(&locale) {
                Some(&(true, _)) if !exact => {}
                _ => {
                    picked.insert(locale, (exact, value));
                }
            }
        }

        Self(
            picked
                .into_iter()
                .map(|(locale, (_, value))| (locale.tag().to_string(), value))
                .collect(),
        )
    }

    /// Set the text for a locale. Blank text removes the entry.
    pub fn insert(&mut self, locale: Locale, value: impl Into<String>) {
        let value = value.into();
        if value.trim().is_empty() {
            self.0.remove(locale.tag());
        } else {
            self.0.insert(locale.tag().to_string(), value);
        }
    }

    /// Best available text for `locale`, or `""` when there is none.
    pub fn get(&self, locale: Locale) -> &str {
        LocaleRegistry::get().resolve_text(&self.0, locale)
    }

    /// Text stored under exactly this locale, without fallback.
    pub fn get_exact(&self, locale: Locale) -> Option<&str> {
        self.0.get(locale.tag()).map(String::as_str)
    }

    /// Check if the default locale has text.
    pub fn has_default(&self) -> bool {
        self.get_exact(Locale::DEFAULT).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
