//! Gutshof reference tables.
//!
//! Everything the matchers and the synthesizer look up lives here: edition
//! keywords and misspellings, the in-domain vocabulary of the topic guard,
//! flavor word lists, base spirits and cocktail name pools. The tables are
//! plain data; `Concierge::from_catalog` turns them into matchers once at
//! startup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::models::category::Category;
use crate::models::recipe::DrinkStyle;

// ── Topic Guard ─────────────────────────────────────────────────────────

/// In-domain vocabulary. Any of these inside a message lets it through.
pub const TOPIC_KEYWORDS: &[&str] = &[
    "gin", "gutshof", "grimm", "rotkaeppchen", "rotkäppchen", "froschkoenig", "froschkönig",
    "aschenputtel", "sterntaler", "classic", "limetta", "mandarina", "rosata",
    "botanicals", "tonic", "cocktail", "longdrink", "martini", "negroni", "collins",
    "geschenk", "foodpairing", "pairing", "versand", "alkohol", "abv", "prozent", "inhalt",
    "rezept", "zutaten",
];

/// Off-domain topics, matched as whole words on normalized text.
pub const OFF_TOPIC_PATTERNS: &[&str] = &[
    r"\b(bank|passwort|bitcoin|steuer|recht|medizin|dating|politik|wetter|fussball)\b",
    r"\b(hack|exploit|illegal|waffe|drogen)\b",
];

// ── Intent ──────────────────────────────────────────────────────────────

/// Edition trigger phrases, in matching priority order.
pub const EDITION_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Rotkaeppchen,
        &["rotkaeppchen", "rotkappchen", "rotkapchen", "rotkapschen", "rotkaepschen", "rotkäppchen"],
    ),
    (Category::Froschkoenig, &["froschkoenig", "frosch konig", "froschkönig"]),
    (Category::Aschenputtel, &["aschenputtel", "aschen puttel"]),
    (Category::Sterntaler, &["sterntaler", "stern taler"]),
    (Category::Classic, &["classic", "klassik", "gutshof classic"]),
    (Category::Limetta, &["limetta"]),
    (Category::Mandarina, &["mandarina"]),
    (Category::Rosata, &["rosata", "rosa ta"]),
];

/// Truncated or misspelled names that map straight to an edition when they
/// make up the whole message.
pub const EDITION_ALIASES: &[(&str, Category)] = &[
    ("rotkapchen", Category::Rotkaeppchen),
    ("rotkapp", Category::Rotkaeppchen),
    ("rotkaep", Category::Rotkaeppchen),
];

// ── Cocktail Generator ──────────────────────────────────────────────────

pub const CITRUS: &[&str] = &["zitrone", "limette", "orange", "grapefruit", "yuzu"];
pub const SWEET: &[&str] = &["zuckersirup", "honig", "agave", "ahornsirup", "vanillesirup", "grenadine"];
pub const BITTER: &[&str] = &["angostura", "campari", "aperol", "amaro", "orange bitters", "peychaud", "bitter"];
pub const HERBAL: &[&str] = &["basilikum", "minze", "rosmarin", "thymian", "salbei", "gurke"];
pub const EFFERVESCENT: &[&str] = &[
    "soda", "tonic", "sekt", "champagner", "prosecco", "sodawasser", "soda wasser", "soda water",
];
pub const FRUITY: &[&str] = &[
    "erdbeere", "himbeere", "brombeere", "maracuja", "pfirsich", "aprikose", "ananas", "mandarine",
];

/// Words that introduce the ingredient list ("Cocktail mit ...").
pub const INGREDIENT_TRIGGERS: &[&str] = &[
    "mit", "aus", "zutaten", "zutat", "verwende", "using", "with", "from", "ingredients", "ingredient",
];

/// Quantity qualifiers stripped from ingredient phrases.
pub const FILLER_WORDS: &[&str] = &[
    "bisschen", "etwas", "ein wenig", "klein", "kleine", "kleinen", "gross", "grosse", "grossen",
    "a little", "some", "small", "little", "big", "large",
];

pub const DEFAULT_BASE_SPIRIT: &str = "Gutshof Gin Classic";

pub const BASE_SPIRITS: &[(Category, &str)] = &[
    (Category::Rotkaeppchen, "Rotkäppchen"),
    (Category::Froschkoenig, "Froschkönig"),
    (Category::Aschenputtel, "Aschenputtel"),
    (Category::Sterntaler, "Sterntaler"),
    (Category::Classic, "Gutshof Gin Classic"),
    (Category::Limetta, "Limetta"),
    (Category::Mandarina, "Mandarina"),
    (Category::Rosata, "Rosata"),
];

pub const NAME_POOLS: &[(DrinkStyle, &[&str])] = &[
    (
        DrinkStyle::Spritz,
        &["Gutshof Spritz", "Märchen-Spritz", "Sterntaler Fizz", "Rotkäppchen Spritz"],
    ),
    (
        DrinkStyle::SourCollins,
        &["Basil Collins", "Grimm Sour", "Forest Smash", "Citrus Smash"],
    ),
    (
        DrinkStyle::StirredAperitif,
        &["Mandarina Boulevard", "Gutshof Negroni Twist", "Amber Grimm"],
    ),
    (
        DrinkStyle::Highball,
        &["Gutshof Highball", "Meadow Tonic", "Garden Highball"],
    ),
];

/// Keyword list for one edition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    pub category: Category,
    pub keywords: Vec<String>,
}

/// The six flavor word lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorLists {
    pub citrus: Vec<String>,
    pub sweet: Vec<String>,
    pub bitter: Vec<String>,
    pub herbal: Vec<String>,
    pub effervescent: Vec<String>,
    pub fruity: Vec<String>,
}

/// All lookup tables, as loaded at startup.
///
/// `Default` is the built-in Gutshof catalog. A JSON file may replace any
/// subset of the fields; missing fields keep their built-in value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub topic_keywords: Vec<String>,
    pub off_topic_patterns: Vec<String>,
    pub keywords: Vec<CategoryKeywords>,
    pub aliases: BTreeMap<String, Category>,
    pub flavors: FlavorLists,
    pub ingredient_triggers: Vec<String>,
    pub filler_words: Vec<String>,
    pub base_spirits: BTreeMap<Category, String>,
    pub default_base_spirit: String,
    pub name_pools: BTreeMap<DrinkStyle, Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid off-topic pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            topic_keywords: owned(TOPIC_KEYWORDS),
            off_topic_patterns: owned(OFF_TOPIC_PATTERNS),
            keywords: EDITION_KEYWORDS
                .iter()
                .map(|(category, kws)| CategoryKeywords {
                    category: *category,
                    keywords: owned(kws),
                })
                .collect(),
            aliases: EDITION_ALIASES
                .iter()
                .map(|(alias, category)| (alias.to_string(), *category))
                .collect(),
            flavors: FlavorLists {
                citrus: owned(CITRUS),
                sweet: owned(SWEET),
                bitter: owned(BITTER),
                herbal: owned(HERBAL),
                effervescent: owned(EFFERVESCENT),
                fruity: owned(FRUITY),
            },
            ingredient_triggers: owned(INGREDIENT_TRIGGERS),
            filler_words: owned(FILLER_WORDS),
            base_spirits: BASE_SPIRITS
                .iter()
                .map(|(category, label)| (*category, label.to_string()))
                .collect(),
            default_base_spirit: DEFAULT_BASE_SPIRIT.to_string(),
            name_pools: NAME_POOLS
                .iter()
                .map(|(style, names)| (*style, owned(names)))
                .collect(),
        }
    }
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load `path` if given, otherwise fall back to the built-in tables.
    pub fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(p) if !p.is_empty() => {
                tracing::info!(path = %p, "Loading catalog override");
                Self::from_file(p)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_edition_has_keywords_and_base() {
        let catalog = Catalog::default();
        for category in Category::iter() {
            assert!(catalog.keywords.iter().any(|k| k.category == category && !k.keywords.is_empty()));
            assert!(catalog.base_spirits.contains_key(&category));
        }
    }

    #[test]
    fn test_keyword_order_follows_editions() {
        let catalog = Catalog::default();
        let order: Vec<Category> = catalog.keywords.iter().map(|k| k.category).collect();
        assert_eq!(order, Category::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_name_pools_cover_all_styles() {
        let catalog = Catalog::default();
        for style in [
            DrinkStyle::Spritz,
            DrinkStyle::SourCollins,
            DrinkStyle::StirredAperitif,
            DrinkStyle::Highball,
        ] {
            let pool = &catalog.name_pools[&style];
            assert!((3..=4).contains(&pool.len()));
        }
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let catalog = Catalog::from_json(r#"{"default_base_spirit": "House Gin"}"#).unwrap();
        assert_eq!(catalog.default_base_spirit, "House Gin");
        assert_eq!(catalog.keywords, Catalog::default().keywords);
    }

    #[test]
    fn test_json_round_trip_of_aliases() {
        let catalog = Catalog::from_json(r#"{"aliases": {"froschi": "froschkoenig"}}"#).unwrap();
        assert_eq!(catalog.aliases.get("froschi"), Some(&Category::Froschkoenig));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(Catalog::from_json("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = Catalog::from_file("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io { .. }));
    }

    #[test]
    fn test_load_without_path_uses_builtin() {
        assert_eq!(Catalog::load(None).unwrap(), Catalog::default());
        assert_eq!(Catalog::load(Some("")).unwrap(), Catalog::default());
    }
}
