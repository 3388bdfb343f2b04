//! Locale type: the closed set of catalog locales.
//!
//! A `Locale` is always one of the supported locales; client input never
//! produces an unsupported value because `LocaleRegistry::normalize_locale`
//! degrades anything unknown to the default.

use crate::i18n::{LocaleConfig, LocaleRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A supported catalog locale.
///
/// The canonical tag (e.g. `pt_br`) is what the database stores as the key
/// of every locale-keyed text blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    /// Brazilian Portuguese, the default locale.
    PtBr,
    /// American English.
    EnUs,
    /// European Spanish.
    EsEs,
}

impl Locale {
    /// The default locale. Every taxonomy value has text for it.
    pub const DEFAULT: Locale = Locale::PtBr;

    /// Every supported locale, in registry order.
    pub const ALL: [Locale; 3] = [Locale::PtBr, Locale::EnUs, Locale::EsEs];

    /// Get the canonical database tag (e.g. `"pt_br"`).
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::PtBr => "pt_br",
            Locale::EnUs => "en_us",
            Locale::EsEs => "es_es",
        }
    }

    /// Get the family prefix, the part of the tag before the first `_`.
    pub fn family(self) -> &'static str {
        family_prefix(self.tag())
    }

    /// Check if this is the default locale.
    pub fn is_default(self) -> bool {
        self == Locale::DEFAULT
    }

    /// Render the tag the way web clients expect it (e.g. `"pt-BR"`).
    pub fn client_format(self) -> String {
        client_format(self.tag())
    }

    /// Get the full locale configuration from the registry.
    pub fn config(self) -> &'static LocaleConfig {
        LocaleRegistry::get().config(self)
    }

    /// Get the English name of the locale.
    pub fn name(self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the locale (e.g. "Português (Brasil)").
    pub fn native_name(self) -> &'static str {
        self.config().native_name
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::DEFAULT
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

impl<'de> Deserialize<'de> for Locale {
    /// Client locales are cosmetic: anything unrecognised becomes the default.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(LocaleRegistry::get().normalize_locale(&raw))
    }
}

/// Portion of a tag before its first `_`, or the whole tag if there is none.
pub(crate) fn family_prefix(tag: &str) -> &str {
    tag.split_once('_').map_or(tag, |(prefix, _)| prefix)
}

/// Format a canonical tag for clients: `pt_br` -> `pt-BR`.
///
/// Tags without a separator are returned unchanged.
pub(crate) fn client_format(tag: &str) -> String {
    match tag.split_once('_') {
        Some((prefix, region)) => format!("{}-{}", prefix, region.to_uppercase()),
        None => tag.to_string(),
    }
}
