//! Broadcast seasons.
//!
//! Seasons follow the Northern-hemisphere quarter convention used by the
//! anime industry, not the calendar solstices.

use crate::i18n::Locale;
use crate::taxonomy::{deserialize_slug, serialize_slug, Resolver, Taxonomy, TaxonomyError};
use chrono::Datelike;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const PT_BR: &str = Locale::PtBr.tag();
const EN_US: &str = Locale::EnUs.tag();
const ES_ES: &str = Locale::EsEs.tag();

/// A broadcast season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

static RESOLVER: OnceLock<Resolver<Season>> = OnceLock::new();

impl Taxonomy for Season {
    const KIND: &'static str = "season";

    fn all() -> &'static [Self] {
        &[Season::Spring, Season::Summer, Season::Autumn, Season::Winter]
    }

    fn slug(self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    fn translations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Season::Spring => &[(PT_BR, "Primavera"), (EN_US, "Spring"), (ES_ES, "Primavera")],
            Season::Summer => &[(PT_BR, "Verão"), (EN_US, "Summer"), (ES_ES, "Verano")],
            Season::Autumn => &[(PT_BR, "Outono"), (EN_US, "Autumn"), (ES_ES, "Otoño")],
            Season::Winter => &[(PT_BR, "Inverno"), (EN_US, "Winter"), (ES_ES, "Invierno")],
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Season::Autumn => &["Fall"],
            _ => &[],
        }
    }

    fn resolver() -> &'static Resolver<Self> {
        RESOLVER.get_or_init(Resolver::load)
    }
}

/// Season a date falls in.
///
/// Jan-Mar is winter, Apr-Jun spring, Jul-Sep summer and Oct-Dec autumn.
/// The date must already be in the reference timezone.
pub fn season_for_date<D: Datelike>(date: &D) -> Season {
    match date.month() {
        1..=3 => Season::Winter,
        4..=6 => Season::Spring,
        7..=9 => Season::Summer,
        10..=12 => Season::Autumn,
        _ => Season::Winter,
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Season {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Season::normalize(s)
    }
}

impl Serialize for Season {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_slug(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Season {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_slug(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    // ==================== Date Rule Tests ====================

    #[test]
    fn test_quarter_boundaries() {
        assert_eq!(season_for_date(&date(2024, 3, 31)), Season::Winter);
        assert_eq!(season_for_date(&date(2024, 4, 1)), Season::Spring);
        assert_eq!(season_for_date(&date(2024, 6, 30)), Season::Spring);
        assert_eq!(season_for_date(&date(2024, 7, 1)), Season::Summer);
        assert_eq!(season_for_date(&date(2024, 9, 30)), Season::Summer);
        assert_eq!(season_for_date(&date(2024, 10, 1)), Season::Autumn);
        assert_eq!(season_for_date(&date(2024, 12, 31)), Season::Autumn);
        assert_eq!(season_for_date(&date(2025, 1, 1)), Season::Winter);
    }

    #[test]
    fn test_every_month() {
        let expected = [
            Season::Winter,
            Season::Winter,
            Season::Winter,
            Season::Spring,
            Season::Spring,
            Season::Spring,
            Season::Summer,
            Season::Summer,
            Season::Summer,
            Season::Autumn,
            Season::Autumn,
            Season::Autumn,
        ];
        for (month, season) in (1..=12).zip(expected) {
            assert_eq!(season_for_date(&date(2023, month, 15)), season, "month {}", month);
        }
    }

    #[test]
    fn test_datetime_input() {
        let aired = Utc.with_ymd_and_hms(2024, 7, 5, 23, 30, 0).unwrap();
        assert_eq!(season_for_date(&aired), Season::Summer);
    }

    // ==================== Normalize Tests ====================

    #[test]
    fn test_normalize() {
        assert_eq!(Season::normalize("Verão").unwrap(), Season::Summer);
        assert_eq!(Season::normalize(" INVIERNO ").unwrap(), Season::Winter);
        assert_eq!(Season::normalize("otoño").unwrap(), Season::Autumn);
        assert_eq!(Season::normalize("fall").unwrap(), Season::Autumn);
    }

    #[test]
    fn test_normalize_unknown() {
        let err = Season::normalize("monsoon").unwrap_err();
        assert_eq!(err.to_string(), "season not recognized: monsoon");
    }

    // ==================== Translate Tests ====================

    #[test]
    fn test_translate() {
        assert_eq!(Season::Summer.translate(Locale::PtBr), "Verão");
        assert_eq!(Season::Summer.translate(Locale::EnUs), "Summer");
        assert_eq!(Season::Autumn.translate(Locale::EsEs), "Otoño");
    }

    #[test]
    fn test_fallback_label_is_slug() {
        assert_eq!(Season::Winter.fallback_label(), "winter");
    }

    // ==================== Conversion Tests ====================

    #[test]
    fn test_serde_uses_slug() {
        assert_eq!(serde_json::to_string(&Season::Summer).unwrap(), "\"summer\"");
        let season: Season = serde_json::from_str("\"autumn\"").unwrap();
        assert_eq!(season, Season::Autumn);
        assert!(serde_json::from_str::<Season>("\"Verão\"").is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("Primavera".parse::<Season>().unwrap(), Season::Spring);
        assert!("".parse::<Season>().is_err());
    }
}
