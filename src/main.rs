//! Taxonomy inspection tool.
//!
//! Usage:
//!   catalog-taxonomy locales                        # Supported locales in client format
//!   catalog-taxonomy genres [LOCALE]                # Every genre with its label
//!   catalog-taxonomy seasons [LOCALE]               # Every season with its label
//!   catalog-taxonomy normalize genre|season TEXT    # Client text -> slug
//!   catalog-taxonomy normalize locale TEXT          # Client locale -> canonical tag
//!   catalog-taxonomy translate genre|season SLUG [LOCALE]
//!   catalog-taxonomy season-for YYYY-MM-DD          # Season a date falls in
//!   catalog-taxonomy check                          # Load every table and print metrics
//!
//! Optional environment variables:
//! - CATALOG_LOCALE (defaults to pt_br)
//! - CATALOG_OUTPUT (text or json, defaults to text)

use anyhow::{bail, Context, Result};
use catalog_taxonomy::catalog::{options, Label};
use catalog_taxonomy::config::{Config, OutputFormat};
use catalog_taxonomy::i18n::{Locale, LocaleRegistry, LookupMetrics};
use catalog_taxonomy::taxonomy::{season_for_date, Genre, Season, Taxonomy};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

const USAGE: &str = "\
Usage:
  catalog-taxonomy locales                        Supported locales in client format
  catalog-taxonomy genres [LOCALE]                Every genre with its label
  catalog-taxonomy seasons [LOCALE]               Every season with its label
  catalog-taxonomy normalize genre|season TEXT    Client text -> slug
  catalog-taxonomy normalize locale TEXT          Client locale -> canonical tag
  catalog-taxonomy translate genre|season SLUG [LOCALE]
  catalog-taxonomy season-for YYYY-MM-DD          Season a date falls in
  catalog-taxonomy check                          Load every table and print metrics

Environment:
  CATALOG_LOCALE   display locale (defaults to pt_br)
  CATALOG_OUTPUT   text or json (defaults to text)";

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog_taxonomy=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["locales"] => {
            let formats = LocaleRegistry::get().list_supported_client_formats();
            print(&config, &formats, || formats.join("\n"))
        }
        ["genres", rest @ ..] => list::<Genre>(&config, locale_arg(&config, rest.first())),
        ["seasons", rest @ ..] => list::<Season>(&config, locale_arg(&config, rest.first())),
        ["normalize", "locale", text] => {
            let locale = LocaleRegistry::get().normalize_locale(text);
            let supported = LocaleRegistry::get().is_locale_supported(text);
            if !supported {
                info!(input = *text, "Locale not supported, using {}", locale);
            }
            print(&config, &locale, || locale.tag().to_string())
        }
        ["normalize", "genre", text] => normalize::<Genre>(&config, text),
        ["normalize", "season", text] => normalize::<Season>(&config, text),
        ["translate", "genre", slug, rest @ ..] => {
            translate::<Genre>(&config, slug, locale_arg(&config, rest.first()))
        }
        ["translate", "season", slug, rest @ ..] => {
            translate::<Season>(&config, slug, locale_arg(&config, rest.first()))
        }
        ["season-for", date] => {
            let date: NaiveDate = date
                .parse()
                .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", date))?;
            let season = season_for_date(&date);
            print(&config, &season, || season.slug().to_string())
        }
        ["check"] => check(&config),
        ["help"] | ["--help"] | ["-h"] => {
            println!("{}", USAGE);
            Ok(())
        }
        _ => {
            eprintln!("{}", USAGE);
            bail!("Unknown command: {}", args.join(" "))
        }
    }
}

fn locale_arg(config: &Config, arg: Option<&&str>) -> Locale {
    arg.map(|raw| LocaleRegistry::get().normalize_locale(raw))
        .unwrap_or(config.display_locale)
}

fn print<T: Serialize>(config: &Config, value: &T, text: impl FnOnce() -> String) -> Result<()> {
    match config.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => println!("{}", text()),
    }
    Ok(())
}

fn list<T: Taxonomy>(config: &Config, locale: Locale) -> Result<()> {
    let labels = options::<T>(locale);
    print(config, &labels, || {
        labels
            .iter()
            .map(|label| format!("{:<16} {}", label.slug, label.label))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn normalize<T: Taxonomy>(config: &Config, text: &str) -> Result<()> {
    let value = T::normalize(text)?;
    print(config, &value.slug(), || value.slug().to_string())
}

fn translate<T: Taxonomy>(config: &Config, slug: &str, locale: Locale) -> Result<()> {
    let value = T::from_slug(slug).with_context(|| format!("Unknown {} slug '{}'", T::KIND, slug))?;
    let label = Label::new(value, locale);
    print(config, &label, || label.label.clone())
}

fn check(config: &Config) -> Result<()> {
    info!(
        genres = Genre::resolver().len(),
        seasons = Season::resolver().len(),
        locales = LocaleRegistry::get().list_all().len(),
        "Taxonomy tables loaded"
    );

    for &genre in Genre::all() {
        for locale in Locale::ALL {
            Genre::normalize(&genre.translate(locale))?;
        }
    }
    for &season in Season::all() {
        for locale in Locale::ALL {
            Season::normalize(&season.translate(locale))?;
        }
    }

    let report = LookupMetrics::global().report();
    print(config, &report, || {
        format!(
            "matched {} of {} lookups, {} texts resolved ({} via fallback)",
            report.slug_hits + report.translation_hits,
            report.slug_hits + report.translation_hits + report.misses,
            report.exact_texts + report.family_texts + report.default_texts + report.any_texts,
            report.family_texts + report.default_texts + report.any_texts,
        )
    })
}
