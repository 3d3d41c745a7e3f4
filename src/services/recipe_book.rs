//! Curated recipes, classic cocktail suggestions and food pairings.

use std::path::Path;
use tracing::{info, warn};

use crate::models::category::Category;
use crate::models::recipe::RecipeCard;

/// Number of classics offered per suggestion list.
pub const MAX_CLASSICS: usize = 4;

struct RecipeSeed {
    name: &'static str,
    tags: &'static [&'static str],
    ingredients: &'static [&'static str],
    gins: &'static [&'static str],
    instructions: &'static str,
}

impl RecipeSeed {
    fn card(&self) -> RecipeCard {
        RecipeCard {
            name: self.name.to_string(),
            tags: self.tags.iter().map(|s| s.to_string()).collect(),
            ingredients: self.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: self.instructions.to_string(),
            gins: self.gins.iter().map(|s| s.to_string()).collect(),
        }
    }
}

const EDITION_RECIPES: &[RecipeSeed] = &[
    RecipeSeed {
        name: "Gutshof Gin & Tonic",
        tags: &["classic", "fresh"],
        ingredients: &["50 ml Gutshof Gin Classic", "150 ml dry tonic", "Lime wheel", "Ice"],
        gins: &["classic"],
        instructions: "Highball with ice, add the gin, top up with tonic, stir gently, lime.",
    },
    RecipeSeed {
        name: "Rotkäppchen Spritz",
        tags: &["fruity", "light"],
        ingredients: &["40 ml Rotkäppchen", "90 ml tonic or soda", "Strawberry", "Ice"],
        gins: &["rotkaeppchen"],
        instructions: "Wine glass with ice, Rotkäppchen, top up with tonic or soda, strawberry.",
    },
    RecipeSeed {
        name: "Froschkönig Basil Smash",
        tags: &["herbal", "fresh"],
        ingredients: &["50 ml Froschkönig", "20 ml lemon", "10 ml simple syrup", "Basil", "Ice"],
        gins: &["froschkoenig"],
        instructions: "Press the basil, shake everything hard, strain over ice.",
    },
];

const CLASSICS: &[RecipeSeed] = &[
    RecipeSeed {
        name: "Tom Collins",
        tags: &["classic"],
        ingredients: &["50 ml gin", "20 ml lemon", "15 ml simple syrup", "Soda", "Ice"],
        gins: &["classic", "limetta"],
        instructions: "Build over ice in a highball, top up with soda, stir briefly, lemon.",
    },
    RecipeSeed {
        name: "Negroni",
        tags: &["classic"],
        ingredients: &["30 ml gin", "30 ml Campari", "30 ml sweet vermouth", "Ice", "Orange zest"],
        gins: &["classic", "mandarina"],
        instructions: "Stir on ice, strain into a tumbler, express the orange zest.",
    },
    RecipeSeed {
        name: "French 75",
        tags: &["classic"],
        ingredients: &["30 ml gin", "15 ml lemon", "10 ml simple syrup", "Sparkling wine / champagne"],
        gins: &["classic", "sterntaler"],
        instructions: "Shake gin, lemon and syrup, pour into a flute, top up with sparkling wine.",
    },
    RecipeSeed {
        name: "Gin Basil Smash",
        tags: &["classic"],
        ingredients: &["50 ml gin", "20 ml lemon", "10 ml simple syrup", "Plenty of basil"],
        gins: &["froschkoenig", "classic"],
        instructions: "Press the basil, shake, double strain.",
    },
    RecipeSeed {
        name: "Bramble",
        tags: &["classic"],
        ingredients: &["40 ml gin", "20 ml lemon", "10 ml simple syrup", "10–15 ml blackberry liqueur", "Ice"],
        gins: &["classic", "rosata"],
        instructions: "Shake gin, lemon and syrup, pour over crushed ice, float the blackberry liqueur.",
    },
];

const PAIRINGS: &[(Category, &[&str])] = &[
    (Category::Classic, &["Citrus-forward dishes", "Oysters & seafood", "Goat cheese", "Olives & almonds"]),
    (Category::Rotkaeppchen, &["Strawberry desserts", "Cheesecake", "Goat cheese with honey", "Vanilla ice cream"]),
    (Category::Froschkoenig, &["Basil pesto", "Caprese", "Grilled vegetables", "Light poultry"]),
    (Category::Aschenputtel, &["Apple strudel", "Roasted almonds", "Soft cheese", "Cinnamon desserts"]),
    (Category::Sterntaler, &["Citrus cake", "Panna cotta", "Aperitivo bites", "Light salads"]),
    (Category::Limetta, &["Ceviche", "Lime tacos", "Fresh salads", "Green apple"]),
    (Category::Mandarina, &["Orange sorbet", "Duck à l'orange", "Dark chocolate", "Caramel"]),
    (Category::Rosata, &["Berry tarts", "Panna cotta", "Prosciutto & melon", "Fresh strawberries"]),
];

#[derive(Debug, thiserror::Error)]
pub enum RecipeBookError {
    #[error("Failed to read recipe file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse recipe file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Recipe tables consulted when a message names an edition.
#[derive(Debug, Clone)]
pub struct RecipeBook {
    recipes: Vec<RecipeCard>,
    classics: Vec<RecipeCard>,
}

impl Default for RecipeBook {
    fn default() -> Self {
        Self {
            recipes: EDITION_RECIPES.iter().map(RecipeSeed::card).collect(),
            classics: CLASSICS.iter().map(RecipeSeed::card).collect(),
        }
    }
}

impl RecipeBook {
    /// Built-in recipes plus any found in the JSON file at `path`.
    ///
    /// A missing file is normal; an unreadable one is logged and skipped.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let mut book = Self::default();
        let path = path.as_ref();
        if !path.exists() {
            return book;
        }
        match read_recipes(path) {
            Ok(extra) => {
                info!(path = %path.display(), count = extra.len(), "Loaded extra recipes");
                book.recipes.extend(extra);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Extra recipes not readable, skipping");
            }
        }
        book
    }

    pub fn with_extra(mut self, extra: impl IntoIterator<Item = RecipeCard>) -> Self {
        self.recipes.extend(extra);
        self
    }

    /// Recipes made with the given edition.
    pub fn recipes_for(&self, category: Category) -> Vec<RecipeCard> {
        self.recipes
            .iter()
            .filter(|r| r.is_for(category))
            .cloned()
            .collect()
    }

    /// Classics to suggest: ones made with `prefer` first, then the rest.
    pub fn classic_suggestions(&self, prefer: Option<Category>) -> Vec<RecipeCard> {
        let (mut picked, rest): (Vec<_>, Vec<_>) = self
            .classics
            .iter()
            .cloned()
            .partition(|c| prefer.is_some_and(|p| c.is_for(p)));
        picked.extend(rest);
        picked.truncate(MAX_CLASSICS);
        picked
    }

    pub fn pairings_for(&self, category: Category) -> Option<Vec<String>> {
        PAIRINGS
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, items)| items.iter().map(|s| s.to_string()).collect())
    }
}

fn read_recipes(path: &Path) -> Result<Vec<RecipeCard>, RecipeBookError> {
    let json = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipes_for_edition() {
        let book = RecipeBook::default();
        let names: Vec<String> = book
            .recipes_for(Category::Froschkoenig)
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["Froschkönig Basil Smash"]);
        assert!(book.recipes_for(Category::Aschenputtel).is_empty());
    }

    #[test]
    fn test_classics_prefer_edition_first() {
        let book = RecipeBook::default();
        let picks = book.classic_suggestions(Some(Category::Mandarina));
        assert_eq!(picks.len(), MAX_CLASSICS);
        assert_eq!(picks[0].name, "Negroni");
        assert_eq!(picks[1].name, "Tom Collins");
    }

    #[test]
    fn test_classics_without_preference_keep_order() {
        let picks = RecipeBook::default().classic_suggestions(None);
        let names: Vec<&str> = picks.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Tom Collins", "Negroni", "French 75", "Gin Basil Smash"]);
    }

    #[test]
    fn test_every_edition_has_pairings() {
        use strum::IntoEnumIterator;
        let book = RecipeBook::default();
        for category in Category::iter() {
            assert_eq!(book.pairings_for(category).map(|p| p.len()), Some(4));
        }
    }

    #[test]
    fn test_extra_recipes_match_by_normalized_gin() {
        let extra = RecipeCard {
            name: "Sterntaler Sour".to_string(),
            tags: vec![],
            ingredients: vec!["50 ml Sterntaler".to_string()],
            instructions: "Shake.".to_string(),
            gins: vec!["Sterntaler".to_string()],
        };
        let book = RecipeBook::default().with_extra([extra]);
        assert_eq!(book.recipes_for(Category::Sterntaler).len(), 1);
    }

    #[test]
    fn test_missing_file_keeps_builtin() {
        let book = RecipeBook::load("/nonexistent/recipes.json");
        assert_eq!(book.recipes_for(Category::Classic).len(), 1);
    }

    #[test]
    fn test_load_reads_json_file() {
        let path = std::env::temp_dir().join("gin-concierge-recipes-test.json");
        std::fs::write(
            &path,
            r#"[{"name": "Limetta Fizz", "instructions": "Build.", "gins": ["limetta"]}]"#,
        )
        .unwrap();
        let book = RecipeBook::load(&path);
        std::fs::remove_file(&path).ok();
        let found = book.recipes_for(Category::Limetta);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Limetta Fizz");
        assert!(found[0].tags.is_empty());
    }

    #[test]
    fn test_broken_file_is_skipped() {
        let path = std::env::temp_dir().join("gin-concierge-recipes-broken.json");
        std::fs::write(&path, "not json").unwrap();
        let book = RecipeBook::load(&path);
        std::fs::remove_file(&path).ok();
        assert_eq!(book.recipes_for(Category::Rotkaeppchen).len(), 1);
    }
}
