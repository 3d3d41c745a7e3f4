use regex::Regex;

use crate::models::recipe::FlavorProfile;
use crate::services::catalog::{Catalog, CatalogError};
use crate::services::normalize::{normalize, normalize_list};

/// Upper bound on phrases taken from one request.
pub const MAX_INGREDIENTS: usize = 8;

/// Pulls ingredient phrases out of requests like
/// "Mach mir einen Cocktail mit Limette, Basilikum und Soda".
#[derive(Debug)]
pub struct IngredientExtractor {
    triggers: Vec<String>,
    separators: Regex,
    fillers: Option<Regex>,
}

impl IngredientExtractor {
    pub fn new(catalog: &Catalog) -> Result<Self, CatalogError> {
        let triggers = catalog
            .ingredient_triggers
            .iter()
            .map(|t| normalize(t))
            .filter(|t| !t.is_empty())
            .map(|t| format!(" {t} "))
            .collect();

        let separators = compile(r",| und | and | plus ")?;

        let mut words: Vec<String> = catalog
            .filler_words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty())
            .collect();
        // longest first so "ein wenig" is removed as a unit
        words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        words.dedup();
        let fillers = if words.is_empty() {
            None
        } else {
            let alternation = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join("|");
            Some(compile(&format!(r"\b(?:{alternation})\b"))?)
        };

        Ok(Self {
            triggers,
            separators,
            fillers,
        })
    }

    /// Ordered ingredient phrases from `text`, at most [`MAX_INGREDIENTS`].
    ///
    /// Everything after the first trigger word ("mit", "aus", "with", ...) is
    /// the ingredient list; without a trigger the whole message is.
    pub fn parse_ingredients_freeform(&self, text: &str) -> Vec<String> {
        let normalized = normalize_list(text);

        let candidate = self
            .triggers
            .iter()
            .find_map(|trigger| {
                normalized
                    .find(trigger.as_str())
                    .map(|idx| &normalized[idx + trigger.len()..])
            })
            .unwrap_or(normalized.as_str());

        self.separators
            .split(candidate)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(|piece| self.strip_fillers(piece))
            .filter(|piece| !piece.is_empty())
            .take(MAX_INGREDIENTS)
            .collect()
    }

    fn strip_fillers(&self, piece: &str) -> String {
        match &self.fillers {
            Some(re) => re
                .replace_all(piece, " ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" "),
            None => piece.to_string(),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, CatalogError> {
    Regex::new(pattern).map_err(|source| CatalogError::Pattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Flags the flavor roles present in a list of ingredient phrases.
#[derive(Debug)]
pub struct FlavorCategorizer {
    citrus: Vec<String>,
    sweet: Vec<String>,
    bitter: Vec<String>,
    herbal: Vec<String>,
    effervescent: Vec<String>,
    fruity: Vec<String>,
}

impl FlavorCategorizer {
    pub fn new(catalog: &Catalog) -> Self {
        let prepare = |words: &[String]| -> Vec<String> {
            words
                .iter()
                .map(|w| normalize(w))
                .filter(|w| !w.is_empty())
                .collect()
        };
        let f = &catalog.flavors;
        Self {
            citrus: prepare(&f.citrus),
            sweet: prepare(&f.sweet),
            bitter: prepare(&f.bitter),
            herbal: prepare(&f.herbal),
            effervescent: prepare(&f.effervescent),
            fruity: prepare(&f.fruity),
        }
    }

    /// Each flag is set when any phrase contains any word of its list.
    pub fn categorize<S: AsRef<str>>(&self, phrases: &[S]) -> FlavorProfile {
        let hit = |words: &[String]| {
            phrases
                .iter()
                .any(|p| words.iter().any(|w| p.as_ref().contains(w.as_str())))
        };
        FlavorProfile {
            has_citrus: hit(&self.citrus),
            has_sweet: hit(&self.sweet),
            has_bitter: hit(&self.bitter),
            has_herbal: hit(&self.herbal),
            has_effervescent: hit(&self.effervescent),
            has_fruity: hit(&self.fruity),
        }
    }
}
