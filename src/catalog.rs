//! Taxonomy handling for anime entries.
//!
//! Entity services hand raw client payloads to this module. It turns them
//! into canonical values for storage and renders stored values back into a
//! locale-specific view.

use crate::i18n::{Locale, LocaleRegistry, LocalizedText};
use crate::taxonomy::{season_for_date, Genre, Season, Taxonomy, TaxonomyError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Taxonomy fields of a create/update anime payload, as sent by clients.
#[derive(Debug, Clone, Deserialize)]
pub struct AnimeTaxonomyInput {
    /// Genre names in any supported locale, or slugs
    pub genres: Vec<String>,

    /// Explicit season; derived from `first_aired` when absent
    #[serde(default)]
    pub season: Option<String>,

    pub first_aired: NaiveDate,
}

/// Canonical taxonomy of an anime, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimeTaxonomy {
    pub genres: Vec<Genre>,
    pub season: Season,
}

impl AnimeTaxonomy {
    /// Normalize client input.
    ///
    /// Genres keep the order they were first given in; repeats (including
    /// the same genre written in two languages) are dropped.
    ///
    /// # Errors
    /// - `TaxonomyError::Empty` if no genre is given
    /// - `TaxonomyError::NotFound` for the first unrecognized genre or season
    pub fn from_input(input: &AnimeTaxonomyInput) -> Result<Self, TaxonomyError> {
        let mut genres = Vec::with_capacity(input.genres.len());
        for raw in &input.genres {
            let genre = Genre::normalize(raw)?;
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }

        if genres.is_empty() {
            return Err(TaxonomyError::Empty { kind: Genre::KIND });
        }

        let season = match input.season.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Season::normalize(raw)?,
            _ => season_for_date(&input.first_aired),
        };

        Ok(Self { genres, season })
    }

    /// Render for a client locale.
    pub fn render(&self, locale: Locale) -> TaxonomyView {
        TaxonomyView {
            locale: LocaleRegistry::get().format_for_client(locale),
            genres: self
                .genres
                .iter()
                .map(|&genre| Label::new(genre, locale))
                .collect(),
            season: Label::new(self.season, locale),
        }
    }
}

/// A canonical value with its display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Label {
    pub slug: &'static str,
    pub label: String,
}

impl Label {
    pub fn new<T: Taxonomy>(value: T, locale: Locale) -> Self {
        Self {
            slug: value.slug(),
            label: value.translate(locale),
        }
    }
}

/// Localized taxonomy of an anime, ready for a response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxonomyView {
    /// Client-format locale the labels are in (e.g. "pt-BR")
    pub locale: String,
    pub genres: Vec<Label>,
    pub season: Label,
}

/// Every value of a taxonomy labelled for a locale, ordered by slug.
///
/// Used to populate filter dropdowns.
pub fn options<T: Taxonomy>(locale: Locale) -> Vec<Label> {
    T::resolver()
        .list_sorted()
        .into_iter()
        .map(|value| Label::new(value, locale))
        .collect()
}

/// Name of an anime for a client locale, given its stored name blob.
pub fn display_name(name: &LocalizedText, client_locale: &str) -> String {
    name.get(LocaleRegistry::get().normalize_locale(client_locale))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(genres: &[&str], season: Option<&str>, first_aired: &str) -> AnimeTaxonomyInput {
        AnimeTaxonomyInput {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            season: season.map(str::to_string),
            first_aired: first_aired.parse().unwrap(),
        }
    }

    // ==================== Normalization Tests ====================

    #[test]
    fn test_from_input_normalizes_and_dedupes() {
        let taxonomy =
            AnimeTaxonomy::from_input(&input(&["Ação", "comedy", "ACTION", "Comédia"], None, "2024-04-06"))
                .unwrap();

        assert_eq!(taxonomy.genres, vec![Genre::Action, Genre::Comedy]);
        assert_eq!(taxonomy.season, Season::Spring);
    }

    #[test]
    fn test_from_input_explicit_season_wins() {
        let taxonomy =
            AnimeTaxonomy::from_input(&input(&["drama"], Some("Inverno"), "2024-08-01")).unwrap();
        assert_eq!(taxonomy.season, Season::Winter);
    }

    #[test]
    fn test_from_input_blank_season_is_derived() {
        let taxonomy =
            AnimeTaxonomy::from_input(&input(&["drama"], Some("  "), "2024-08-01")).unwrap();
        assert_eq!(taxonomy.season, Season::Summer);
    }

    #[test]
    fn test_from_input_requires_a_genre() {
        let err = AnimeTaxonomy::from_input(&input(&[], None, "2024-01-01")).unwrap_err();
        assert_eq!(err, TaxonomyError::Empty { kind: "genre" });
        assert_eq!(err.to_string(), "at least one genre is required");
    }

    #[test]
    fn test_from_input_rejects_unknown_genre() {
        let err =
            AnimeTaxonomy::from_input(&input(&["action", "Culinária"], None, "2024-01-01")).unwrap_err();
        assert_eq!(err.to_string(), "genre not recognized: Culinária");
    }

    #[test]
    fn test_from_input_rejects_unknown_season() {
        let err =
            AnimeTaxonomy::from_input(&input(&["action"], Some("monsoon"), "2024-01-01")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_input_deserializes_from_payload() {
        let payload = r#"{"genres": ["Ficção Científica", "mecha"], "first_aired": "2023-10-07"}"#;
        let input: AnimeTaxonomyInput = serde_json::from_str(payload).unwrap();
        let taxonomy = AnimeTaxonomy::from_input(&input).unwrap();

        assert_eq!(taxonomy.genres, vec![Genre::SciFi, Genre::Mecha]);
        assert_eq!(taxonomy.season, Season::Autumn);
    }

    #[test]
    fn test_stored_form_uses_slugs() {
        let taxonomy = AnimeTaxonomy {
            genres: vec![Genre::SliceOfLife],
            season: Season::Summer,
        };
        let json = serde_json::to_value(&taxonomy).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"genres": ["slice_of_life"], "season": "summer"})
        );
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render() {
        let taxonomy = AnimeTaxonomy {
            genres: vec![Genre::SciFi, Genre::Kids],
            season: Season::Summer,
        };
        let view = taxonomy.render(Locale::EsEs);

        assert_eq!(view.locale, "es-ES");
        assert_eq!(
            view.genres,
            vec![
                Label {
                    slug: "sci-fi",
                    label: "Ciencia Ficción".to_string()
                },
                Label {
                    slug: "kids",
                    label: "Infantil".to_string()
                },
            ]
        );
        assert_eq!(view.season.label, "Verano");
    }

    #[test]
    fn test_options_sorted_by_slug() {
        let seasons = options::<Season>(Locale::EnUs);
        let slugs: Vec<_> = seasons.iter().map(|label| label.slug).collect();

        assert_eq!(slugs, vec!["autumn", "spring", "summer", "winter"]);
        assert_eq!(seasons[0].label, "Autumn");
    }

    #[test]
    fn test_display_name_uses_client_locale() {
        let name = LocalizedText::from_client([("pt_br", "Ataque dos Titãs"), ("en_us", "Attack on Titan")]);

        assert_eq!(display_name(&name, "en-GB"), "Attack on Titan");
        assert_eq!(display_name(&name, "es-MX"), "Ataque dos Titãs");
        assert_eq!(display_name(&name, "garbage"), "Ataque dos Titãs");
    }
}
