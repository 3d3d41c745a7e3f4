//! Cocktail synthesis from free-form ingredients.
//!
//! A fixed decision table over the flavor flags picks the drink style; the
//! quantities, ingredient lines, instructions and tags follow from the same
//! flags. The recipe name is the only random choice and draws from the
//! caller's RNG.

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use crate::models::category::Category;
use crate::models::recipe::{
    BuildMethod, DrinkStyle, FlavorProfile, Glass, Measures, SynthesizedRecipe,
};
use crate::services::catalog::Catalog;
use crate::services::ingredients::FlavorCategorizer;

pub const BASE_ML: u32 = 50;
pub const CITRUS_ML: u32 = 20;

/// Style, method and glass for a flavor profile. First matching rule wins:
/// bubbles with citrus make a spritz, citrus alone a sour, bitter alone a
/// stirred aperitif, anything else a highball.
pub fn select_style(flavors: &FlavorProfile) -> (DrinkStyle, BuildMethod, Glass) {
    if flavors.has_effervescent && flavors.has_citrus {
        (DrinkStyle::Spritz, BuildMethod::BuildOverIce, Glass::WineGlass)
    } else if flavors.has_citrus {
        (DrinkStyle::SourCollins, BuildMethod::Shake, Glass::Highball)
    } else if flavors.has_bitter {
        (DrinkStyle::StirredAperitif, BuildMethod::Stir, Glass::Tumbler)
    } else {
        (DrinkStyle::Highball, BuildMethod::BuildOverIce, Glass::Highball)
    }
}

/// Syrup amount. Bitter alone also takes the full 10 ml.
pub fn sweetener_ml(flavors: &FlavorProfile) -> u32 {
    if (flavors.has_citrus && !flavors.has_effervescent) || flavors.has_bitter {
        10
    } else if flavors.has_citrus {
        8
    } else {
        0
    }
}

pub fn measures(flavors: &FlavorProfile) -> Measures {
    Measures {
        base_ml: BASE_ML,
        citrus_ml: if flavors.has_citrus { CITRUS_ML } else { 0 },
        sweetener_ml: sweetener_ml(flavors),
    }
}

/// Builds a [`SynthesizedRecipe`] from ingredient phrases.
#[derive(Debug)]
pub struct RecipeSynthesizer {
    categorizer: FlavorCategorizer,
    base_spirits: BTreeMap<Category, String>,
    default_base: String,
    name_pools: BTreeMap<DrinkStyle, Vec<String>>,
}

impl RecipeSynthesizer {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            categorizer: FlavorCategorizer::new(catalog),
            base_spirits: catalog.base_spirits.clone(),
            default_base: catalog.default_base_spirit.clone(),
            name_pools: catalog.name_pools.clone(),
        }
    }

    pub fn categorizer(&self) -> &FlavorCategorizer {
        &self.categorizer
    }

    /// Gin used as the base; unknown or missing editions get the default.
    pub fn base_spirit(&self, category: Option<Category>) -> &str {
        category
            .and_then(|c| self.base_spirits.get(&c))
            .map(String::as_str)
            .unwrap_or(&self.default_base)
    }

    /// Synthesize a recipe. Total over any phrase list, including empty.
    pub fn generate_recipe<S, R>(
        &self,
        phrases: &[S],
        category: Option<Category>,
        rng: &mut R,
    ) -> SynthesizedRecipe
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        let flavors = self.categorizer.categorize(phrases);
        self.generate_from_profile(flavors, category, rng)
    }

    pub fn generate_from_profile<R: Rng + ?Sized>(
        &self,
        flavors: FlavorProfile,
        category: Option<Category>,
        rng: &mut R,
    ) -> SynthesizedRecipe {
        let base = self.base_spirit(category).to_string();
        let (style, method, glass) = select_style(&flavors);
        let measures = measures(&flavors);

        let name = self
            .name_pools
            .get(&style)
            .and_then(|pool| pool.choose(rng))
            .cloned()
            .unwrap_or_else(|| style.to_string());

        let ingredients = ingredient_lines(&base, &flavors, &measures);
        let instructions = instruction_text(&flavors, method, glass);
        let tags = tags(style, &flavors);

        debug!(
            name = %name,
            style = %style,
            base = %base,
            lines = ingredients.len(),
            "Synthesized cocktail"
        );

        SynthesizedRecipe {
            name,
            base_spirit: base,
            style,
            method,
            glass,
            flavors,
            measures,
            ingredients,
            instructions,
            tags,
            gins: vec![category.map_or_else(|| "classic".to_string(), |c| c.to_string())],
        }
    }
}

fn ingredient_lines(base: &str, flavors: &FlavorProfile, measures: &Measures) -> Vec<String> {
    let mut lines = vec![format!("{} ml {}", measures.base_ml, base)];
    if flavors.has_citrus {
        lines.push(format!("{} ml fresh citrus juice", measures.citrus_ml));
    }
    if measures.sweetener_ml > 0 {
        lines.push(format!("{} ml simple syrup", measures.sweetener_ml));
    }
    if flavors.has_bitter {
        lines.push("1–2 dashes bitters".to_string());
    }
    if flavors.has_effervescent {
        lines.push("Soda / tonic / sparkling wine (to top up)".to_string());
    }
    if flavors.has_herbal {
        lines.push("Basil/mint (fresh)".to_string());
    }
    if flavors.has_fruity {
        lines.push("Berries (optional)".to_string());
    }
    lines
}

fn instruction_text(flavors: &FlavorProfile, method: BuildMethod, glass: Glass) -> String {
    let mut steps: Vec<String> = Vec::new();

    match method {
        BuildMethod::Shake => {
            steps.push("Fill a shaker with ice.".to_string());
            if flavors.has_herbal {
                steps.push("Press the herbs lightly, do not tear them.".to_string());
            }
            steps.push("Add gin, juice and syrup, shake hard.".to_string());
            steps.push(format!("Strain over fresh ice into a {glass}."));
        }
        BuildMethod::Stir => {
            steps.push(
                "Stir in a mixing glass with ice, then strain into a tumbler over a large ice cube."
                    .to_string(),
            );
        }
        BuildMethod::BuildOverIce => {
            steps.push(format!("Build directly over ice in a {glass} and stir briefly."));
        }
    }

    if flavors.has_effervescent {
        steps.push("Top up with bubbles to taste.".to_string());
    }
    if flavors.has_bitter && method != BuildMethod::Stir {
        steps.push("Add bitters to taste at the end.".to_string());
    }
    if flavors.has_herbal {
        steps.push("Slap fresh herbs gently and garnish.".to_string());
    }
    if flavors.has_fruity {
        steps.push("Garnish with berries.".to_string());
    }
    steps.push("Cheers!".to_string());

    steps.join(" ")
}

fn tags(style: DrinkStyle, flavors: &FlavorProfile) -> Vec<String> {
    let mut tags = vec![style.to_string().to_lowercase()];
    let flagged = [
        (flavors.has_citrus, "citrus"),
        (flavors.has_herbal, "herbal"),
        (flavors.has_effervescent, "spritz"),
        (flavors.has_bitter, "bitter"),
        (flavors.has_fruity, "fruity"),
    ];
    tags.extend(
        flagged
            .into_iter()
            .filter(|(set, _)| *set)
            .map(|(_, tag)| tag.to_string()),
    );
    tags
}
