use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

use crate::models::category::Category;
use crate::models::chat::ProductCard;

const PRODUCT_SEARCH_QUERY: &str = r#"
query($q: String!) {
  products(first: 10, query: $q) {
    edges {
      node {
        title handle
        variants(first: 1) { edges { node { price { amount currencyCode } } } }
        images(first: 1) { edges { node { url } } }
      }
    }
  }
}
"#;

/// Client for the Shopify Storefront GraphQL API.
///
/// Without a domain and token every search returns no products, so the chat
/// keeps working against an unconfigured shop.
pub struct StorefrontClient {
    http: Client,
    domain: String,
    token: String,
    api_version: String,
    shop_url_base: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<SearchData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct SearchData {
    products: Connection<ProductNode>,
}

#[derive(Deserialize)]
struct Connection<T> {
    #[serde(default = "Vec::new")]
    edges: Vec<Edge<T>>,
}

#[derive(Deserialize)]
struct Edge<T> {
    node: T,
}

#[derive(Deserialize)]
struct ProductNode {
    title: String,
    handle: String,
    variants: Option<Connection<VariantNode>>,
    images: Option<Connection<ImageNode>>,
}

#[derive(Deserialize)]
struct VariantNode {
    price: Option<Money>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Money {
    amount: String,
    currency_code: Option<String>,
}

#[derive(Deserialize)]
struct ImageNode {
    url: String,
}

impl StorefrontClient {
    pub fn new(
        domain: &str,
        token: &str,
        api_version: &str,
        shop_url_base: &str,
        timeout: Duration,
    ) -> Result<Self, StorefrontError> {
        let http = Client::builder().timeout(timeout).build()?;
        let domain = domain
            .trim()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            http,
            domain,
            token: token.to_string(),
            api_version: api_version.to_string(),
            shop_url_base: shop_url_base.trim_end_matches('/').to_string(),
        })
    }

    pub fn is_configured(&self) -> bool {
        !self.domain.is_empty() && !self.token.is_empty()
    }

    pub fn token_present(&self) -> bool {
        !self.token.is_empty()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn shop_url_base(&self) -> &str {
        &self.shop_url_base
    }

    /// Search products whose title or tag matches `fragment`.
    pub async fn search_by_title(&self, fragment: &str) -> Result<Vec<ProductCard>, StorefrontError> {
        if !self.is_configured() {
            warn!("Storefront not configured, skipping product search");
            return Ok(Vec::new());
        }

        let url = format!("https://{}/api/{}/graphql.json", self.domain, self.api_version);
        let body = serde_json::json!({
            "query": PRODUCT_SEARCH_QUERY,
            "variables": { "q": format!("title:{fragment} OR tag:{fragment}") }
        });

        let response = self
            .http
            .post(&url)
            .header("X-Shopify-Storefront-Access-Token", &self.token)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: GraphQlResponse = response.json().await?;
        if let Some(first) = parsed.errors.first() {
            return Err(StorefrontError::GraphQl(first.message.clone()));
        }

        let products = parsed
            .data
            .map(|d| d.products.edges)
            .unwrap_or_default()
            .into_iter()
            .map(|edge| self.product_card(edge.node))
            .collect::<Vec<_>>();

        info!(fragment = %fragment, count = products.len(), "Storefront search finished");
        Ok(products)
    }

    /// Products for an edition. Errors degrade to no products; with a shop
    /// URL configured an empty result becomes a single search link.
    pub async fn find_products_for(&self, category: Category) -> Vec<ProductCard> {
        let title = category.title();
        let products = self.search_or_empty(title).await;

        if products.is_empty() && !self.shop_url_base.is_empty() {
            if let Some(url) = self.search_link(title) {
                return vec![ProductCard {
                    title: title.to_string(),
                    url: url.to_string(),
                    image: String::new(),
                    price: None,
                    currency: Some("EUR".to_string()),
                }];
            }
        }
        products
    }

    /// Shop search page for `query`, with the query percent-encoded.
    /// `None` when the configured shop URL does not parse.
    pub fn search_link(&self, query: &str) -> Option<Url> {
        let base = format!("{}/search", self.shop_url_base);
        match Url::parse_with_params(&base, &[("q", query)]) {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(base = %self.shop_url_base, error = %e, "Invalid shop URL, no search link");
                None
            }
        }
    }

    /// Like [`search_by_title`](Self::search_by_title) but logs failures
    /// and returns no products instead.
    pub async fn search_or_empty(&self, fragment: &str) -> Vec<ProductCard> {
        match self.search_by_title(fragment).await {
            Ok(products) => products,
            Err(e) => {
                metrics::counter!("storefront_requests_failed").increment(1);
                warn!(fragment = %fragment, error = %e, "Storefront search failed");
                Vec::new()
            }
        }
    }

    fn product_card(&self, node: ProductNode) -> ProductCard {
        let price = node
            .variants
            .and_then(|v| v.edges.into_iter().next())
            .and_then(|e| e.node.price);
        let image = node
            .images
            .and_then(|i| i.edges.into_iter().next())
            .map(|e| e.node.url)
            .unwrap_or_default();
        let url = if self.shop_url_base.is_empty() {
            String::new()
        } else {
            format!("{}/products/{}", self.shop_url_base, node.handle)
        };

        let (price, currency) = match price {
            Some(m) => (Some(m.amount), Some(m.currency_code.unwrap_or_else(|| "EUR".to_string()))),
            None => (None, Some("EUR".to_string())),
        };

        ProductCard {
            title: node.title,
            url,
            image,
            price,
            currency,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorefrontError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Storefront returned GraphQL error: {0}")]
    GraphQl(String),
}
