//! Resolver: the public surface of a taxonomy.
//!
//! Entity services call [`Resolver::normalize`] when they accept client input
//! and [`Resolver::translate`] when they render output. Everything a resolver
//! holds is built once and only read afterwards.

use crate::i18n::{Locale, LocaleRegistry, LookupMetrics, TableValidator};
use crate::taxonomy::cache::fold;
use crate::taxonomy::{LookupCache, Taxonomy, TaxonomyError, TranslationTable};
use tracing::{debug, warn};

/// Normalization and translation for one taxonomy.
#[derive(Debug, Clone)]
pub struct Resolver<T: Taxonomy> {
    table: TranslationTable<T>,
    cache: LookupCache<T>,
}

impl<T: Taxonomy> Resolver<T> {
    /// Build the resolver from the taxonomy's compiled-in table.
    ///
    /// The table is validated first: warnings are logged, errors abort.
    ///
    /// # Errors
    /// `TaxonomyError::InvalidTable` if validation reports errors,
    /// `TaxonomyError::Collision` if two values share a lookup text.
    pub fn build() -> Result<Self, TaxonomyError> {
        let table = TranslationTable::<T>::from_static();

        let report = TableValidator::validate(T::KIND, table.entries());
        for warning in &report.warnings {
            warn!(kind = T::KIND, "{}", warning);
        }
        if report.has_errors() {
            return Err(TaxonomyError::InvalidTable {
                kind: T::KIND,
                errors: report.errors,
            });
        }

        Self::from_table(table)
    }

    /// Build for use as a process-wide resolver.
    ///
    /// # Panics
    /// Panics if the compiled-in table is broken. That is a data bug in the
    /// binary, not something a request can trigger or recover from.
    pub fn load() -> Self {
        Self::build().unwrap_or_else(|err| panic!("Failed to load {} taxonomy: {}", T::KIND, err))
    }

    fn from_table(table: TranslationTable<T>) -> Result<Self, TaxonomyError> {
        let cache = LookupCache::build(&table)?;
        debug!(
            kind = T::KIND,
            values = table.len(),
            lookup_texts = cache.text_count(),
            "Taxonomy resolver initialized"
        );
        Ok(Self { table, cache })
    }

    /// Convert client text to a canonical value.
    ///
    /// Matching ignores case and surrounding whitespace. The slug is tried
    /// first, then every locale's display text and the declared aliases.
    /// There is no fuzzy matching.
    ///
    /// # Errors
    /// `TaxonomyError::NotFound` carrying the raw input when nothing matches.
    pub fn normalize(&self, input: &str) -> Result<T, TaxonomyError> {
        let key = fold(input);
        let metrics = LookupMetrics::global();

        if let Some(value) = self.cache.exact(&key) {
            metrics.record_slug_hit();
            return Ok(value);
        }

        if let Some(value) = self.cache.any(&key) {
            metrics.record_translation_hit();
            return Ok(value);
        }

        metrics.record_miss();
        debug!(kind = T::KIND, input, "No match for input");
        Err(TaxonomyError::NotFound {
            kind: T::KIND,
            input: input.to_string(),
        })
    }

    /// Strict lookup of a stored slug: exact, no folding, no translations.
    pub fn from_slug(&self, slug: &str) -> Option<T> {
        self.cache.exact(slug).filter(|value| value.slug() == slug)
    }

    /// Check if a value belongs to this taxonomy's table.
    pub fn is_valid(&self, value: T) -> bool {
        self.table.contains(value)
    }

    /// Display text of `value` for `locale`.
    ///
    /// Invalid values render as `""`. Valid values go through the registry's
    /// fallback chain; a value with no texts at all gets its generated
    /// fallback label.
    pub fn translate(&self, value: T, locale: Locale) -> String {
        let Some(texts) = self.table.get(value) else {
            return String::new();
        };

        if texts.is_empty() {
            LookupMetrics::global().record_generated_label();
            return value.fallback_label();
        }

        LocaleRegistry::get().resolve_text(texts, locale).to_string()
    }

    /// Every value of the taxonomy in declaration order.
    ///
    /// Callers that need a specific order should sort themselves or use
    /// [`Resolver::list_sorted`].
    pub fn list_all(&self) -> Vec<T> {
        self.table.values().to_vec()
    }

    /// Every value ordered by slug.
    pub fn list_sorted(&self) -> Vec<T> {
        let mut values = self.list_all();
        values.sort_by_key(|value| value.slug());
        values
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}
