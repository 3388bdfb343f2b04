//! Translation table: every value of a taxonomy with its per-locale texts.

use crate::taxonomy::Taxonomy;
use std::collections::HashMap;

/// Texts of one value keyed by locale tag (or family prefix).
pub type Translations = HashMap<&'static str, &'static str>;

/// Read-only mapping from each value of `T` to its display texts.
///
/// Built once from the taxonomy's static data and never mutated.
#[derive(Debug, Clone)]
pub struct TranslationTable<T: Taxonomy> {
    order: Vec<T>,
    entries: HashMap<T, Translations>,
}

impl<T: Taxonomy> TranslationTable<T> {
    /// Build the table from the taxonomy's compiled-in data.
    pub fn from_static() -> Self {
        Self::from_entries(
            T::all()
                .iter()
                .map(|&value| (value, value.translations().iter().copied().collect())),
        )
    }

    /// Build a table from explicit entries. A repeated value keeps its
    /// first position and its last texts.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (T, Translations)>,
    {
        let mut order = Vec::new();
        let mut map = HashMap::new();
        for (value, texts) in entries {
            if map.insert(value, texts).is_none() {
                order.push(value);
            }
        }
        Self {
            order,
            entries: map,
        }
    }

    /// Texts of a value, if it belongs to the table.
    pub fn get(&self, value: T) -> Option<&Translations> {
        self.entries.get(&value)
    }

    pub fn contains(&self, value: T) -> bool {
        self.entries.contains_key(&value)
    }

    /// Values in the order they were declared.
    pub fn values(&self) -> &[T] {
        &self.order
    }

    /// `(slug, texts)` pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &Translations)> + '_ {
        self.order
            .iter()
            .filter_map(|value| self.entries.get(value).map(|texts| (value.slug(), texts)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
