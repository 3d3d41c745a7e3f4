use metrics_exporter_prometheus::PrometheusBuilder;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

use gin_concierge::app_state::AppState;
use gin_concierge::config::AppConfig;
use gin_concierge::routes;
use gin_concierge::services::{
    catalog::Catalog, concierge::Concierge, recipe_book::RecipeBook,
    storefront::StorefrontClient,
};

#[tokio::main]
async fn main() {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let config = AppConfig::from_env().expect("Failed to load configuration from environment");

    tracing::info!("Initializing gin-concierge server");

    let prometheus_handle = PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");
    let prometheus_handle = Arc::new(prometheus_handle);

    metrics::describe_counter!(
        "chat_requests_total",
        "Chat messages answered, labelled by outcome"
    );
    metrics::describe_histogram!(
        "chat_processing_seconds",
        "Time to plan and render one chat answer"
    );
    metrics::describe_counter!(
        "storefront_requests_failed",
        "Storefront searches that failed and degraded to no products"
    );

    let catalog = Catalog::load(config.catalog_path.as_deref()).expect("Failed to load catalog");
    let concierge = Concierge::with_fuzzy(&catalog, config.fuzzy_metric, config.fuzzy_cutoff)
        .expect("Failed to build matchers from catalog");
    tracing::info!(
        metric = ?config.fuzzy_metric,
        cutoff = config.fuzzy_cutoff,
        "Intent matchers ready"
    );

    let recipes = RecipeBook::load(&config.recipes_path);

    let storefront = StorefrontClient::new(
        &config.shopify_storefront_domain,
        &config.shopify_storefront_token,
        &config.shopify_api_version,
        &config.shop_url_base,
        Duration::from_secs(config.http_timeout_secs),
    )
    .expect("Failed to initialize storefront client");
    if !storefront.is_configured() {
        tracing::warn!("Storefront domain or token missing, product search disabled");
    }

    let state = AppState::new(concierge, recipes, storefront, config.origins());
    let app = routes::router(state, prometheus_handle);

    tracing::info!("Starting gin-concierge on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
