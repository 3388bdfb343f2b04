//! Lookup metrics and observability module.
//!
//! This module counts how normalization and display-text resolution are
//! answered: which index matched raw input, how often input was rejected,
//! and how deep into the fallback chain translations had to go.

use crate::i18n::FallbackStep;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Inputs matched by the exact slug index
    slug_hits: AtomicUsize,

    /// Inputs matched by the any-translation index
    translation_hits: AtomicUsize,

    /// Inputs that matched nothing
    misses: AtomicUsize,

    /// Texts found under the exact locale tag
    exact_texts: AtomicUsize,

    /// Texts found under the locale family prefix
    family_texts: AtomicUsize,

    /// Texts found under the default locale
    default_texts: AtomicUsize,

    /// Texts found by taking any non-empty value
    any_texts: AtomicUsize,

    /// Resolutions that produced no text at all
    missing_texts: AtomicUsize,

    /// Labels generated from a slug because no translation existed
    generated_labels: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Create a detached set of counters, all zero.
    pub fn new() -> Self {
        Self {
            slug_hits: AtomicUsize::new(0),
            translation_hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
            exact_texts: AtomicUsize::new(0),
            family_texts: AtomicUsize::new(0),
            default_texts: AtomicUsize::new(0),
            any_texts: AtomicUsize::new(0),
            missing_texts: AtomicUsize::new(0),
            generated_labels: AtomicUsize::new(0),
        }
    }

    /// Get the global lookup metrics instance.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(LookupMetrics::new)
    }

    /// Record an input matched by its slug.
    pub fn record_slug_hit(&self) {
        self.slug_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an input matched by one of its translations or aliases.
    pub fn record_translation_hit(&self) {
        self.translation_hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an input that matched nothing.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Record which fallback step produced a display text.
    pub fn record_fallback(&self, step: FallbackStep) {
        let counter = match step {
            FallbackStep::Exact => &self.exact_texts,
            FallbackStep::Family => &self.family_texts,
            FallbackStep::Default => &self.default_texts,
            FallbackStep::Any => &self.any_texts,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a resolution with no usable text.
    pub fn record_missing_text(&self) {
        self.missing_texts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a label generated from a slug.
    pub fn record_generated_label(&self) {
        self.generated_labels.fetch_add(1, Ordering::Relaxed);
    }

    pub fn slug_hits(&self) -> usize {
        self.slug_hits.load(Ordering::Relaxed)
    }

    pub fn translation_hits(&self) -> usize {
        self.translation_hits.load(Ordering::Relaxed)
    }

    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }

    pub fn generated_labels(&self) -> usize {
        self.generated_labels.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let slug_hits = self.slug_hits();
        let translation_hits = self.translation_hits();
        let misses = self.misses();
        let total_lookups = slug_hits + translation_hits + misses;
        let match_rate = if total_lookups > 0 {
            ((slug_hits + translation_hits) as f64 / total_lookups as f64) * 100.0
        } else {
            0.0
        };

        let exact_texts = self.exact_texts.load(Ordering::Relaxed);
        let family_texts = self.family_texts.load(Ordering::Relaxed);
        let default_texts = self.default_texts.load(Ordering::Relaxed);
        let any_texts = self.any_texts.load(Ordering::Relaxed);
        let resolved = exact_texts + family_texts + default_texts + any_texts;
        let exact_text_rate = if resolved > 0 {
            (exact_texts as f64 / resolved as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            slug_hits,
            translation_hits,
            misses,
            match_rate,
            exact_texts,
            family_texts,
            default_texts,
            any_texts,
            missing_texts: self.missing_texts.load(Ordering::Relaxed),
            generated_labels: self.generated_labels(),
            exact_text_rate,
        }
    }
}

impl Default for LookupMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Metrics report containing current lookup statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub slug_hits: usize,
    pub translation_hits: usize,
    pub misses: usize,

    /// Matched inputs as a percentage of all normalization attempts (0-100)
    pub match_rate: f64,

    pub exact_texts: usize,
    pub family_texts: usize,
    pub default_texts: usize,
    pub any_texts: usize,
    pub missing_texts: usize,
    pub generated_labels: usize,

    /// Texts answered by the exact locale as a percentage of resolved texts (0-100)
    pub exact_text_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Counter Tests ====================

    #[test]
    fn test_record_slug_hit() {
        let metrics = LookupMetrics::new();

        assert_eq!(metrics.slug_hits(), 0);
        metrics.record_slug_hit();
        assert_eq!(metrics.slug_hits(), 1);
        metrics.record_slug_hit();
        assert_eq!(metrics.slug_hits(), 2);
    }

    #[test]
    fn test_record_translation_hit_and_miss() {
        let metrics = LookupMetrics::new();

        metrics.record_translation_hit();
        metrics.record_miss();
        assert_eq!(metrics.translation_hits(), 1);
        assert_eq!(metrics.misses(), 1);
    }

    #[test]
    fn test_record_fallback_steps() {
        let metrics = LookupMetrics::new();

        metrics.record_fallback(FallbackStep::Exact);
        metrics.record_fallback(FallbackStep::Family);
        metrics.record_fallback(FallbackStep::Family);
        metrics.record_fallback(FallbackStep::Default);
        metrics.record_fallback(FallbackStep::Any);

        let report = metrics.report();
        assert_eq!(report.exact_texts, 1);
        assert_eq!(report.family_texts, 2);
        assert_eq!(report.default_texts, 1);
        assert_eq!(report.any_texts, 1);
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_report_empty() {
        let report = LookupMetrics::new().report();

        assert_eq!(report.slug_hits, 0);
        assert_eq!(report.misses, 0);
        assert_eq!(report.match_rate, 0.0);
        assert_eq!(report.exact_text_rate, 0.0);
        assert_eq!(report.missing_texts, 0);
        assert_eq!(report.generated_labels, 0);
    }

    #[test]
    fn test_report_match_rate() {
        let metrics = LookupMetrics::new();

        // 2 slug hits, 1 translation hit, 1 miss = 75% match rate
        metrics.record_slug_hit();
        metrics.record_slug_hit();
        metrics.record_translation_hit();
        metrics.record_miss();

        assert_eq!(metrics.report().match_rate, 75.0);
    }

    #[test]
    fn test_report_exact_text_rate() {
        let metrics = LookupMetrics::new();

        metrics.record_fallback(FallbackStep::Exact);
        metrics.record_fallback(FallbackStep::Default);
        metrics.record_missing_text();

        let report = metrics.report();
        assert_eq!(report.exact_text_rate, 50.0);
        assert_eq!(report.missing_texts, 1);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = LookupMetrics::new();
        metrics.record_generated_label();

        let json = serde_json::to_value(metrics.report()).unwrap();
        assert_eq!(json["generated_labels"], 1);
        assert_eq!(json["slug_hits"], 0);
    }

    // ==================== Singleton Tests ====================

    #[test]
    fn test_global_returns_same_instance() {
        let metrics1 = LookupMetrics::global();
        let metrics2 = LookupMetrics::global();

        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    fn test_global_counts_are_visible_across_references() {
        // Other tests touch the global counters concurrently, so only
        // check that our own increment is visible.
        let metrics1 = LookupMetrics::global();
        let initial = metrics1.misses();
        metrics1.record_miss();

        assert!(LookupMetrics::global().misses() > initial);
    }
}
