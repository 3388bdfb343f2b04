//! Reverse-lookup indexes over a translation table.
//!
//! Normalizing client text would otherwise scan every locale of every value.
//! Both indexes are built once from the table and answer in O(1).

use crate::taxonomy::{Taxonomy, TaxonomyError, TranslationTable};
use std::collections::HashMap;

/// Exact-slug and any-translation indexes for a taxonomy.
#[derive(Debug, Clone)]
pub struct LookupCache<T: Taxonomy> {
    /// Lower-cased slug -> value
    exact_slug_index: HashMap<String, T>,
    /// Case-folded slug, translation or alias -> value
    any_translation_index: HashMap<String, T>,
}

impl<T: Taxonomy> LookupCache<T> {
    /// Build both indexes from a table.
    ///
    /// Every value's own slug is also indexed as a translation, so each value
    /// is reachable by text even if no locale text equals its slug.
    ///
    /// # Errors
    /// Returns `TaxonomyError::Collision` when two different values fold to
    /// the same slug or lookup text.
    pub fn build(table: &TranslationTable<T>) -> Result<Self, TaxonomyError> {
        let mut exact_slug_index = HashMap::with_capacity(table.len());
        let mut any_translation_index = HashMap::with_capacity(table.len() * 4);

        for &value in table.values() {
            let slug = fold(value.slug());
            insert_unique(&mut exact_slug_index, slug.clone(), value)?;
            insert_unique(&mut any_translation_index, slug, value)?;

            let texts = table.get(value).into_iter().flat_map(|texts| texts.values());
            for text in texts.chain(value.aliases()) {
                let key = fold(text);
                if !key.is_empty() {
                    insert_unique(&mut any_translation_index, key, value)?;
                }
            }
        }

        Ok(Self {
            exact_slug_index,
            any_translation_index,
        })
    }

    /// Look up an already folded slug.
    pub fn exact(&self, key: &str) -> Option<T> {
        self.exact_slug_index.get(key).copied()
    }

    /// Look up already folded text in any locale.
    pub fn any(&self, key: &str) -> Option<T> {
        self.any_translation_index.get(key).copied()
    }

    pub fn slug_count(&self) -> usize {
        self.exact_slug_index.len()
    }

    pub fn text_count(&self) -> usize {
        self.any_translation_index.len()
    }
}

/// Trim and lower-case text for lookup.
pub(crate) fn fold(text: &str) -> String {
    text.trim().to_lowercase()
}

fn insert_unique<T: Taxonomy>(
    index: &mut HashMap<String, T>,
    key: String,
    value: T,
) -> Result<(), TaxonomyError> {
    match index.get(&key) {
        Some(&existing) if existing != value => Err(TaxonomyError::Collision {
            kind: T::KIND,
            text: key,
            first: existing.slug(),
            second: value.slug(),
        }),
        Some(_) => Ok(()),
        None => {
            index.insert(key, value);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{Resolver, Season};

    /// Two moods whose Spanish texts fold to the same string.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Mood {
        Calm,
        Quiet,
    }

    impl Taxonomy for Mood {
        const KIND: &'static str = "mood";

        fn all() -> &'static [Self] {
            &[Mood::Calm, Mood::Quiet]
        }

        fn slug(self) -> &'static str {
            match self {
                Mood::Calm => "calm",
                Mood::Quiet => "quiet",
            }
        }

        fn translations(self) -> &'static [(&'static str, &'static str)] {
            match self {
                Mood::Calm => &[("pt_br", "Calmo"), ("es_es", "Tranquilo")],
                Mood::Quiet => &[("pt_br", "Quieto"), ("es_es", "TRANQUILO ")],
            }
        }

        fn resolver() -> &'static Resolver<Self> {
            unreachable!("mood is only used to build caches directly")
        }
    }

    #[test]
    fn test_build_indexes_slugs_translations_and_aliases() {
        let cache = LookupCache::build(&TranslationTable::<Season>::from_static()).unwrap();

        assert_eq!(cache.slug_count(), 4);
        assert_eq!(cache.exact("summer"), Some(Season::Summer));
        assert_eq!(cache.any("verão"), Some(Season::Summer));
        assert_eq!(cache.any("otoño"), Some(Season::Autumn));
        assert_eq!(cache.any("fall"), Some(Season::Autumn));
    }

    #[test]
    fn test_exact_index_holds_only_slugs() {
        let cache = LookupCache::build(&TranslationTable::<Season>::from_static()).unwrap();
        assert_eq!(cache.exact("verão"), None);
    }

    #[test]
    fn test_same_text_for_same_value_is_not_a_collision() {
        // "Primavera" is both pt_br and es_es for spring.
        let cache = LookupCache::build(&TranslationTable::<Season>::from_static()).unwrap();
        assert_eq!(cache.any("primavera"), Some(Season::Spring));
    }

    #[test]
    fn test_collision_fails_fast() {
        let err = LookupCache::build(&TranslationTable::<Mood>::from_static()).unwrap_err();

        assert_eq!(
            err,
            TaxonomyError::Collision {
                kind: "mood",
                text: "tranquilo".to_string(),
                first: "calm",
                second: "quiet",
            }
        );
    }

    #[test]
    fn test_fold() {
        assert_eq!(fold("  Ficção Científica "), "ficção científica");
        assert_eq!(fold("AÇÃO"), "ação");
    }
}
