//! Anime genres.
//!
//! Slugs are English so the database vocabulary is the same for every
//! audience. Display texts cover every supported locale.

use crate::i18n::Locale;
use crate::taxonomy::{deserialize_slug, serialize_slug, Resolver, Taxonomy, TaxonomyError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const PT_BR: &str = Locale::PtBr.tag();
const EN_US: &str = Locale::EnUs.tag();
const ES_ES: &str = Locale::EsEs.tag();

/// An anime genre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Horror,
    Romance,
    SciFi,
    SliceOfLife,
    Sports,
    Mystery,
    Supernatural,
    Thriller,
    Isekai,
    Mecha,
    Harem,
    Ecchi,
    Psychological,
    School,
    Military,
    Music,
    Historical,
    Shonen,
    Shojo,
    Seinen,
    Josei,
    Kids,
}

static ALL_GENRES: [Genre; 27] = [
    Genre::Action,
    Genre::Adventure,
    Genre::Comedy,
    Genre::Drama,
    Genre::Fantasy,
    Genre::Horror,
    Genre::Romance,
    Genre::SciFi,
    Genre::SliceOfLife,
    Genre::Sports,
    Genre::Mystery,
    Genre::Supernatural,
    Genre::Thriller,
    Genre::Isekai,
    Genre::Mecha,
    Genre::Harem,
    Genre::Ecchi,
    Genre::Psychological,
    Genre::School,
    Genre::Military,
    Genre::Music,
    Genre::Historical,
    Genre::Shonen,
    Genre::Shojo,
    Genre::Seinen,
    Genre::Josei,
    Genre::Kids,
];

static RESOLVER: OnceLock<Resolver<Genre>> = OnceLock::new();

impl Taxonomy for Genre {
    const KIND: &'static str = "genre";

    fn all() -> &'static [Self] {
        &ALL_GENRES
    }

    fn slug(self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Adventure => "adventure",
            Genre::Comedy => "comedy",
            Genre::Drama => "drama",
            Genre::Fantasy => "fantasy",
            Genre::Horror => "horror",
            Genre::Romance => "romance",
            Genre::SciFi => "sci-fi",
            Genre::SliceOfLife => "slice_of_life",
            Genre::Sports => "sports",
            Genre::Mystery => "mystery",
            Genre::Supernatural => "supernatural",
            Genre::Thriller => "thriller",
            Genre::Isekai => "isekai",
            Genre::Mecha => "mecha",
            Genre::Harem => "harem",
            Genre::Ecchi => "ecchi",
            Genre::Psychological => "psychological",
            Genre::School => "school",
            Genre::Military => "military",
            Genre::Music => "music",
            Genre::Historical => "historical",
            Genre::Shonen => "shonen",
            Genre::Shojo => "shojo",
            Genre::Seinen => "seinen",
            Genre::Josei => "josei",
            Genre::Kids => "kids",
        }
    }

    fn translations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Genre::Action => &[(PT_BR, "Ação"), (EN_US, "Action"), (ES_ES, "Acción")],
            Genre::Adventure => &[(PT_BR, "Aventura"), (EN_US, "Adventure"), (ES_ES, "Aventura")],
            Genre::Comedy => &[(PT_BR, "Comédia"), (EN_US, "Comedy"), (ES_ES, "Comedia")],
            Genre::Drama => &[(PT_BR, "Drama"), (EN_US, "Drama"), (ES_ES, "Drama")],
            Genre::Fantasy => &[(PT_BR, "Fantasia"), (EN_US, "Fantasy"), (ES_ES, "Fantasía")],
            Genre::Horror => &[(PT_BR, "Terror"), (EN_US, "Horror"), (ES_ES, "Terror")],
            Genre::Romance => &[(PT_BR, "Romance"), (EN_US, "Romance"), (ES_ES, "Romance")],
            Genre::SciFi => &[
                (PT_BR, "Ficção Científica"),
                (EN_US, "Sci-Fi"),
                (ES_ES, "Ciencia Ficción"),
            ],
            Genre::SliceOfLife => &[
                (PT_BR, "Vida Cotidiana"),
                (EN_US, "Slice of Life"),
                (ES_ES, "Recuentos de la vida"),
            ],
            Genre::Sports => &[(PT_BR, "Esportes"), (EN_US, "Sports"), (ES_ES, "Deportes")],
            Genre::Mystery => &[(PT_BR, "Mistério"), (EN_US, "Mystery"), (ES_ES, "Misterio")],
            Genre::Supernatural => &[
                (PT_BR, "Sobrenatural"),
                (EN_US, "Supernatural"),
                (ES_ES, "Sobrenatural"),
            ],
            Genre::Thriller => &[(PT_BR, "Suspense"), (EN_US, "Thriller"), (ES_ES, "Suspenso")],
            Genre::Isekai => &[(PT_BR, "Isekai"), (EN_US, "Isekai"), (ES_ES, "Isekai")],
            Genre::Mecha => &[(PT_BR, "Mecha"), (EN_US, "Mecha"), (ES_ES, "Mecha")],
            Genre::Harem => &[(PT_BR, "Harem"), (EN_US, "Harem"), (ES_ES, "Harem")],
            Genre::Ecchi => &[(PT_BR, "Ecchi"), (EN_US, "Ecchi"), (ES_ES, "Ecchi")],
            Genre::Psychological => &[
                (PT_BR, "Psicológico"),
                (EN_US, "Psychological"),
                (ES_ES, "Psicológico"),
            ],
            Genre::School => &[(PT_BR, "Escolar"), (EN_US, "School"), (ES_ES, "Escolar")],
            Genre::Military => &[(PT_BR, "Militar"), (EN_US, "Military"), (ES_ES, "Militar")],
            Genre::Music => &[(PT_BR, "Musical"), (EN_US, "Music"), (ES_ES, "Musical")],
            Genre::Historical => &[
                (PT_BR, "Histórico"),
                (EN_US, "Historical"),
                (ES_ES, "Histórico"),
            ],
            Genre::Shonen => &[(PT_BR, "Shounen"), (EN_US, "Shonen"), (ES_ES, "Shonen")],
            Genre::Shojo => &[(PT_BR, "Shoujo"), (EN_US, "Shojo"), (ES_ES, "Shojo")],
            Genre::Seinen => &[(PT_BR, "Seinen"), (EN_US, "Seinen"), (ES_ES, "Seinen")],
            Genre::Josei => &[(PT_BR, "Josei"), (EN_US, "Josei"), (ES_ES, "Josei")],
            Genre::Kids => &[(PT_BR, "Infantil"), (EN_US, "Kids"), (ES_ES, "Infantil")],
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Genre::SciFi => &["Ciência Ficção", "Science Fiction", "Sci Fi", "Ficción Científica"],
            Genre::SliceOfLife => &["Slice-of-Life", "Cotidiano"],
            Genre::Shonen => &["Shōnen"],
            Genre::Shojo => &["Shōjo"],
            Genre::Kids => &["Kodomo"],
            _ => &[],
        }
    }

    /// `slice_of_life` -> `Slice Of Life`
    fn fallback_label(self) -> String {
        title_case(&self.slug().replace('_', " "))
    }

    fn resolver() -> &'static Resolver<Self> {
        RESOLVER.get_or_init(Resolver::load)
    }
}

/// Upper-case the first letter of every word. Spaces and `-` both start a word.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c == ' ' || c == '-';
    }
    out
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Genre {
    type Err = TaxonomyError;

    /// Accepts slugs and display text in any locale.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::normalize(s)
    }
}

impl Serialize for Genre {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_slug(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Genre {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_slug(deserializer)
    }
}
