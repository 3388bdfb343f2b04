use crate::i18n::{Locale, LocaleRegistry};
use anyhow::{bail, Result};

/// How the CLI prints its results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => bail!("Unknown CATALOG_OUTPUT '{}', expected 'text' or 'json'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Locale used when a command does not name one
    pub display_locale: Locale,

    pub output: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            std::env::var("CATALOG_LOCALE").ok().as_deref(),
            std::env::var("CATALOG_OUTPUT").ok().as_deref(),
        )
    }

    fn from_vars(locale: Option<&str>, output: Option<&str>) -> Result<Self> {
        Ok(Self {
            // Locale is cosmetic: an unknown value degrades to the default
            display_locale: locale
                .map(|value| LocaleRegistry::get().normalize_locale(value))
                .unwrap_or(Locale::DEFAULT),

            output: output
                .map(OutputFormat::parse)
                .transpose()?
                .unwrap_or(OutputFormat::Text),
        })
    }
}
