//! Internationalization (i18n) module for the catalog's locales.
//!
//! Every locale-related rule lives here: which locales exist, how client
//! locale tags are canonicalized, how canonical tags are shown to clients,
//! and the fallback chain used to pick display text for a locale.
//!
//! # Architecture
//!
//! - `locale`: the closed `Locale` enum and its tag/format helpers
//! - `registry`: single source of truth for supported locales and fallback
//! - `text`: locale-keyed text blobs stored on catalog entities
//! - `validator`: checks taxonomy translation tables when they load
//! - `metrics`: lookup observability
//!
//! # Example
//!
//! ```rust
//! use catalog_taxonomy::i18n::{Locale, LocaleRegistry};
//!
//! let registry = LocaleRegistry::get();
//! assert_eq!(registry.normalize_locale("pt-BR"), Locale::PtBr);
//! assert_eq!(registry.format_for_client(Locale::EsEs), "es-ES");
//! ```

mod locale;
mod metrics;
mod registry;
mod text;
mod validator;

pub use locale::Locale;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{FallbackStep, LocaleConfig, LocaleMatch, LocaleRegistry};
pub use text::LocalizedText;
pub use validator::{TableValidator, ValidationReport};
