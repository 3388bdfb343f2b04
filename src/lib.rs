//! Locale and taxonomy normalization for the anime sticker catalog.
//!
//! Entity services use this crate through two calls: turn raw client text
//! into a canonical slug (`Genre::normalize`, `Season::normalize`,
//! `LocaleRegistry::normalize_locale`) and turn a canonical slug into display
//! text for a locale (`Taxonomy::translate`). All tables are compiled in and
//! built once on first use; every lookup afterwards is a read of immutable
//! data.

pub mod catalog;
pub mod config;
pub mod i18n;
pub mod taxonomy;
