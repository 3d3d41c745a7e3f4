//! The assistant's decision core.
//!
//! [`Concierge`] owns every matcher built from the catalog and turns a raw
//! message into a [`ChatPlan`]. Planning does no I/O; the chat route renders
//! the plan and fetches products where the plan asks for them.

use rand::Rng;
use serde::Serialize;

use crate::models::category::Category;
use crate::models::recipe::{FlavorProfile, SynthesizedRecipe};
use crate::services::catalog::{Catalog, CatalogError};
use crate::services::ingredients::IngredientExtractor;
use crate::services::intent::{IntentClassifier, IntentMatch, FUZZY_CUTOFF};
use crate::services::normalize::normalize;
use crate::services::similarity::FuzzyMetric;
use crate::services::synthesizer::RecipeSynthesizer;
use crate::services::topic_guard::TopicGuard;

/// Phrases that announce a build-your-own cocktail request.
const CUSTOM_TRIGGERS: &[&str] = &[
    "cocktail mit", "drink mit", "rezept mit", "mach mir", "mach einen", "aus ", "zutaten", "mit ",
    "cocktail with", "drink with", "make me", "with ", "using ",
];

/// At least one of these must also be present for a custom request.
const CUSTOM_MARKERS: &[&str] = &[" mit ", " aus ", " zutaten", " with ", " using ", " ingredients"];

const GREETINGS: &[&str] = &["hallo", "hi", "servus", "hey", "moin", "hello"];

const SUGGESTION_WORDS: &[&str] = &[
    "vorschlae", "vorschlag", "ideen", "rezepte", "cocktail ideen", "cocktailideen", "drinks",
    "ideas", "suggestions",
];

const RECIPE_WORDS: &[&str] = &["rezept", "cocktail", "drink", "mixen", "recipe"];

const PAIRING_WORDS: &[&str] = &["pair", "food", "essen", "passt zu", "pairing"];

const BROWSE_WORDS: &[&str] = &[
    "gin", "edition", "produkt", "produkte", "zeigen", "zeige", "shop", "products", "show",
];

/// Canned answer topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Faq {
    Shipping,
    Alcohol,
    Botanicals,
    Gift,
}

impl Faq {
    pub fn answer(self) -> &'static str {
        match self {
            Faq::Alcohol => {
                "Our gins are typically bottled at 40–45 % vol. The product page shows the exact value."
            }
            Faq::Shipping => "Within Germany usually 2–4 working days. Costs and details at checkout.",
            Faq::Botanicals => {
                "Juniper and citrus, plus edition-specific accents (e.g. strawberry in Rotkäppchen, \
                 a basil note in Froschkönig)."
            }
            Faq::Gift => {
                "Popular picks: the fairy-tale set, or Classic with two nosing glasses. \
                 I can send you product links right away."
            }
        }
    }
}

/// What to answer, decided from the message alone.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatPlan {
    /// Message is about something other than gin.
    OffTopic,
    Greeting,
    Faq(Faq),
    /// Custom cocktail request with at least one ingredient.
    CustomCocktail(Box<SynthesizedRecipe>),
    /// Custom cocktail request where no ingredient could be parsed.
    AskForIngredients,
    /// Wants cocktail ideas; classics made with `prefer` come first.
    ClassicIdeas { prefer: Option<Category> },
    /// Wants to see gins but named no edition.
    BrowseCatalogue,
    /// Nothing to go on.
    AskForEdition,
    Edition {
        category: Category,
        wants_recipe: bool,
        wants_pairing: bool,
    },
}

impl ChatPlan {
    /// Metric label.
    pub fn outcome(&self) -> &'static str {
        match self {
            ChatPlan::OffTopic => "off_topic",
            ChatPlan::Greeting => "greeting",
            ChatPlan::Faq(_) => "faq",
            ChatPlan::CustomCocktail(_) => "custom_cocktail",
            ChatPlan::AskForIngredients => "ask_for_ingredients",
            ChatPlan::ClassicIdeas { .. } => "classic_ideas",
            ChatPlan::BrowseCatalogue => "browse",
            ChatPlan::AskForEdition => "ask_for_edition",
            ChatPlan::Edition { .. } => "edition",
        }
    }
}

fn contains_any(normalized: &str, words: &[&str]) -> bool {
    words.iter().any(|w| normalized.contains(*w))
}

/// Whether a normalized message asks for a cocktail from named ingredients.
pub fn wants_custom_cocktail(normalized: &str) -> bool {
    contains_any(normalized, CUSTOM_TRIGGERS) && contains_any(normalized, CUSTOM_MARKERS)
}

/// Greetings count only as whole words ("hi" inside "himbeere" is not one).
pub fn is_greeting(normalized: &str) -> bool {
    normalized.split_whitespace().any(|t| GREETINGS.contains(&t))
}

pub fn faq_topic(normalized: &str) -> Option<Faq> {
    if contains_any(normalized, &["versand", "liefer", "shipping"]) {
        Some(Faq::Shipping)
    } else if contains_any(normalized, &["alkohol", "prozent", "abv"]) {
        Some(Faq::Alcohol)
    } else if contains_any(normalized, &["botanical", "zutaten", "aroma"]) {
        Some(Faq::Botanicals)
    } else if contains_any(normalized, &["geschenk", "present", "gift"]) {
        Some(Faq::Gift)
    } else {
        None
    }
}

pub struct Concierge {
    guard: TopicGuard,
    intents: IntentClassifier,
    extractor: IngredientExtractor,
    synthesizer: RecipeSynthesizer,
}

impl Concierge {
    pub fn from_catalog(catalog: &Catalog) -> Result<Self, CatalogError> {
        Self::with_fuzzy(catalog, FuzzyMetric::default(), FUZZY_CUTOFF)
    }

    pub fn with_fuzzy(
        catalog: &Catalog,
        metric: FuzzyMetric,
        cutoff: f64,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            guard: TopicGuard::new(catalog)?,
            intents: IntentClassifier::with_fuzzy(catalog, metric, cutoff),
            extractor: IngredientExtractor::new(catalog)?,
            synthesizer: RecipeSynthesizer::new(catalog),
        })
    }

    pub fn is_on_topic(&self, text: &str) -> bool {
        self.guard.is_on_topic(text)
    }

    pub fn extract_intent(&self, text: &str) -> Option<Category> {
        self.intents.extract_intent(text)
    }

    pub fn classify_intent(&self, text: &str) -> Option<IntentMatch> {
        self.intents.classify(text)
    }

    pub fn parse_ingredients_freeform(&self, text: &str) -> Vec<String> {
        self.extractor.parse_ingredients_freeform(text)
    }

    pub fn categorize<S: AsRef<str>>(&self, phrases: &[S]) -> FlavorProfile {
        self.synthesizer.categorizer().categorize(phrases)
    }

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
        self.synthesizer.generate_recipe(phrases, category, rng)
    }

    /// Decide how to answer `message`. Checks run in a fixed order: topic
    /// guard, greeting, FAQ, custom cocktail, cocktail ideas, catalogue
    /// browsing, then the named edition.
    pub fn plan<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ChatPlan {
        let normalized = normalize(message);

        if !self.guard.is_normalized_on_topic(&normalized) {
            return ChatPlan::OffTopic;
        }
        if is_greeting(&normalized) {
            return ChatPlan::Greeting;
        }
        if let Some(faq) = faq_topic(&normalized) {
            return ChatPlan::Faq(faq);
        }

        let intent = self.intents.classify_normalized(&normalized).map(|m| m.category);

        if wants_custom_cocktail(&normalized) {
            let ingredients = self.extractor.parse_ingredients_freeform(message);
            if ingredients.is_empty() {
                return ChatPlan::AskForIngredients;
            }
            let recipe = self.synthesizer.generate_recipe(&ingredients, intent, rng);
            return ChatPlan::CustomCocktail(Box::new(recipe));
        }

        if contains_any(&normalized, SUGGESTION_WORDS) {
            return ChatPlan::ClassicIdeas { prefer: intent };
        }

        match intent {
            None if contains_any(&normalized, BROWSE_WORDS) => ChatPlan::BrowseCatalogue,
            None => ChatPlan::AskForEdition,
            Some(category) => ChatPlan::Edition {
                category,
                wants_recipe: contains_any(&normalized, RECIPE_WORDS),
                wants_pairing: contains_any(&normalized, PAIRING_WORDS),
            },
        }
    }
}
