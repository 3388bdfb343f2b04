//! Catalog taxonomies: closed sets of canonical values with localized names.
//!
//! Every taxonomy follows the same pattern:
//!
//! - a closed enum implementing [`Taxonomy`], whose slug is the database value
//! - a [`TranslationTable`] built from its static texts
//! - a [`LookupCache`] turning client text back into values in O(1)
//! - a process-wide [`Resolver`] exposing normalize/translate/is_valid/list
//!
//! # Example
//!
//! ```rust
//! use catalog_taxonomy::i18n::Locale;
//! use catalog_taxonomy::taxonomy::{Genre, Taxonomy};
//!
//! let genre = Genre::normalize("Ficção Científica").unwrap();
//! assert_eq!(genre, Genre::SciFi);
//! assert_eq!(genre.translate(Locale::EnUs), "Sci-Fi");
//! ```

mod cache;
mod error;
mod genre;
mod resolver;
mod season;
mod table;

pub use cache::LookupCache;
pub use error::TaxonomyError;
pub use genre::Genre;
pub use resolver::Resolver;
pub use season::{season_for_date, Season};
pub use table::{TranslationTable, Translations};

use crate::i18n::Locale;
use serde::{de, Deserialize, Deserializer, Serializer};
use std::fmt;
use std::hash::Hash;

/// A closed set of canonical catalog values.
pub trait Taxonomy: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Name used in errors and logs (e.g. "genre").
    const KIND: &'static str;

    /// Every value of the set.
    fn all() -> &'static [Self];

    /// Canonical database value (e.g. `"sci-fi"`).
    fn slug(self) -> &'static str;

    /// Display texts as `(locale key, text)` pairs.
    fn translations(self) -> &'static [(&'static str, &'static str)];

    /// Extra inputs accepted by `normalize` but never displayed.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }

    /// Label shown when a valid value has no texts at all.
    fn fallback_label(self) -> String {
        self.slug().to_string()
    }

    /// The process-wide resolver for this taxonomy.
    fn resolver() -> &'static Resolver<Self>;

    /// Convert client text to a value. See [`Resolver::normalize`].
    fn normalize(input: &str) -> Result<Self, TaxonomyError> {
        Self::resolver().normalize(input)
    }

    /// Strict lookup of a stored slug. See [`Resolver::from_slug`].
    fn from_slug(slug: &str) -> Option<Self> {
        Self::resolver().from_slug(slug)
    }

    /// Display text for a locale. See [`Resolver::translate`].
    fn translate(self, locale: Locale) -> String {
        Self::resolver().translate(self, locale)
    }

    /// Check if the value is part of the loaded table. See [`Resolver::is_valid`].
    fn is_valid(self) -> bool {
        Self::resolver().is_valid(self)
    }
}

/// Serialize a value as its slug.
pub(crate) fn serialize_slug<T: Taxonomy, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.slug())
}

/// Deserialize a stored slug. Display texts are rejected: stored data must
/// use the canonical vocabulary.
pub(crate) fn deserialize_slug<'de, T: Taxonomy, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<T, D::Error> {
    let raw = String::deserialize(deserializer)?;
    T::from_slug(&raw)
        .ok_or_else(|| de::Error::custom(format!("unknown {} slug: {}", T::KIND, raw)))
}
