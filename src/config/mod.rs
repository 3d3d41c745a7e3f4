use serde::Deserialize;

use crate::services::similarity::FuzzyMetric;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Server bind address (e.g., "0.0.0.0:10000").
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// Shopify storefront host; a leading scheme is ignored.
    #[serde(default)]
    pub shopify_storefront_domain: String,

    /// Storefront API access token
    #[serde(default)]
    pub shopify_storefront_token: String,

    #[serde(default = "default_api_version")]
    pub shopify_api_version: String,

    /// Public shop URL used to build product and search links
    #[serde(default)]
    pub shop_url_base: String,

    /// Storefront request timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// Comma-separated CORS origins. Empty means any origin.
    #[serde(default)]
    pub allowed_origins: String,

    /// Optional JSON array of extra recipe cards
    #[serde(default = "default_recipes_path")]
    pub recipes_path: String,

    /// Optional JSON catalog replacing the built-in lookup tables
    #[serde(default)]
    pub catalog_path: Option<String>,

    /// Similarity score used by the fuzzy intent fallback
    #[serde(default)]
    pub fuzzy_metric: FuzzyMetric,

    #[serde(default = "default_fuzzy_cutoff")]
    pub fuzzy_cutoff: f64,
}

fn default_bind_addr() -> String {
    "0.0.0.0:10000".to_string()
}

fn default_api_version() -> String {
    "2025-01".to_string()
}

fn default_http_timeout() -> u64 {
    15
}

fn default_recipes_path() -> String {
    "recipes.json".to_string()
}

fn default_fuzzy_cutoff() -> f64 {
    crate::services::intent::FUZZY_CUTOFF
}

impl AppConfig {
    pub fn from_env() -> Result<Self, envy::Error> {
        dotenvy::dotenv().ok();
        envy::from_env()
    }

    /// Parsed CORS origins; `["*"]` when none are configured.
    pub fn origins(&self) -> Vec<String> {
        let origins: Vec<String> = self
            .allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(String::from)
            .collect();
        if origins.is_empty() {
            vec!["*".to_string()]
        } else {
            origins
        }
    }
}
