use std::sync::Arc;

use crate::services::{concierge::Concierge, recipe_book::RecipeBook, storefront::StorefrontClient};

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub concierge: Arc<Concierge>,
    pub recipes: Arc<RecipeBook>,
    pub storefront: Arc<StorefrontClient>,
    /// CORS origins, echoed by the diagnostics endpoint.
    pub allowed_origins: Arc<Vec<String>>,
}

impl AppState {
    pub fn new(
        concierge: Concierge,
        recipes: RecipeBook,
        storefront: StorefrontClient,
        allowed_origins: Vec<String>,
    ) -> Self {
        Self {
            concierge: Arc::new(concierge),
            recipes: Arc::new(recipes),
            storefront: Arc::new(storefront),
            allowed_origins: Arc::new(allowed_origins),
        }
    }
}
