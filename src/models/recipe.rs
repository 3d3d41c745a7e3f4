use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::models::category::Category;

/// Drink archetype picked by the synthesizer's decision table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
pub enum DrinkStyle {
    #[strum(serialize = "Spritz")]
    Spritz,
    #[strum(serialize = "Sour/Collins")]
    SourCollins,
    #[strum(serialize = "Stirred Aperitif")]
    StirredAperitif,
    #[strum(serialize = "Highball")]
    Highball,
}

/// How the drink is put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BuildMethod {
    Shake,
    Stir,
    BuildOverIce,
}

/// Serving vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum Glass {
    #[strum(serialize = "wine glass")]
    WineGlass,
    #[strum(serialize = "highball")]
    Highball,
    #[strum(serialize = "tumbler")]
    Tumbler,
}

/// Flavor roles present in a list of ingredient phrases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorProfile {
    pub has_citrus: bool,
    pub has_sweet: bool,
    pub has_bitter: bool,
    pub has_herbal: bool,
    pub has_effervescent: bool,
    pub has_fruity: bool,
}

/// Liquid amounts in millilitres. Zero means the component is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measures {
    pub base_ml: u32,
    pub citrus_ml: u32,
    pub sweetener_ml: u32,
}

/// A cocktail generated from free-form ingredients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedRecipe {
    pub name: String,
    pub base_spirit: String,
    pub style: DrinkStyle,
    pub method: BuildMethod,
    pub glass: Glass,
    pub flavors: FlavorProfile,
    pub measures: Measures,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub tags: Vec<String>,
    /// Edition slugs the recipe is built on.
    pub gins: Vec<String>,
}

/// Recipe as shown to the user, shared by built-in, file-loaded and
/// synthesized recipes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeCard {
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    pub instructions: String,
    #[serde(default)]
    pub gins: Vec<String>,
}

impl RecipeCard {
    pub fn is_for(&self, category: Category) -> bool {
        self.gins
            .iter()
            .any(|g| crate::services::normalize::normalize(g) == category.as_ref())
    }
}

impl From<SynthesizedRecipe> for RecipeCard {
    fn from(recipe: SynthesizedRecipe) -> Self {
        Self {
            name: recipe.name,
            tags: recipe.tags,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            gins: recipe.gins,
        }
    }
}
