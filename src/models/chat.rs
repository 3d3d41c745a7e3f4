use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::models::recipe::RecipeCard;

/// Incoming chat message.
#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[garde(length(chars, max = 2000))]
    #[serde(default)]
    pub message: String,
}

/// Product tile returned by the storefront search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCard {
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub image: String,
    pub price: Option<String>,
    pub currency: Option<String>,
}

/// Reply to a chat message. Empty sections are omitted from the JSON.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipes: Option<Vec<RecipeCard>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pairings: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl ChatResponse {
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Default::default()
        }
    }

    pub fn with_suggestions<I, S>(mut self, suggestions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.suggestions = Some(suggestions.into_iter().map(Into::into).collect());
        self
    }
}
