//! HTTP tests against the router, driven with `oneshot` and no network.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use metrics_exporter_prometheus::PrometheusBuilder;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use gin_concierge::app_state::AppState;
use gin_concierge::routes;
use gin_concierge::services::{
    catalog::Catalog, concierge::Concierge, recipe_book::RecipeBook,
    storefront::StorefrontClient,
};

fn app_with_shop(shop_url_base: &str) -> Router {
    let concierge = Concierge::from_catalog(&Catalog::default()).unwrap();
    let storefront =
        StorefrontClient::new("", "", "2025-01", shop_url_base, Duration::from_secs(1)).unwrap();
    let state = AppState::new(
        concierge,
        RecipeBook::default(),
        storefront,
        vec!["*".to_string()],
    );
    let handle = PrometheusBuilder::new().build_recorder().handle();
    routes::router(state, Arc::new(handle))
}

fn app() -> Router {
    app_with_shop("")
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap_or(Value::Null)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

async fn chat(app: Router, message: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "message": message }).to_string();
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, body_json(response).await)
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "gin-concierge");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn test_off_topic_message() {
    let (status, body) = chat(app(), "Wie wird das Wetter morgen?").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].as_str().unwrap().starts_with("I can only help"));
    assert_eq!(body["suggestions"].as_array().unwrap().len(), 5);
    assert!(body.get("products").is_none());
    assert!(body.get("recipes").is_none());
}

#[tokio::test]
async fn test_edition_recipe_request() {
    let (status, body) = chat(app(), "Rezept für Froschkönig").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Here is Froschkönig 👑🐸");
    assert_eq!(body["recipes"][0]["name"], "Froschkönig Basil Smash");
    // unconfigured storefront without a shop URL yields no product cards
    assert!(body.get("products").is_none());
    assert!(body.get("pairings").is_none());
}

#[tokio::test]
async fn test_edition_gets_classic_teaser_and_pairings() {
    let (_, body) = chat(app(), "Foodpairing Rosata").await;
    assert_eq!(body["response"], "Here is Rosata 🍓");
    assert_eq!(body["pairings"].as_array().unwrap().len(), 4);
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["name"], "Bramble");
}

#[tokio::test]
async fn test_edition_search_link_with_shop_url() {
    let (_, body) = chat(app_with_shop("https://shop.example"), "Zeig Aschenputtel").await;
    assert_eq!(
        body["products"][0]["url"],
        "https://shop.example/search?q=Aschenputtel"
    );
    assert_eq!(body["recipes"][0]["name"], "Tom Collins");
}

#[tokio::test]
async fn test_custom_cocktail() {
    let (status, body) = chat(app(), "Mach mir einen Cocktail mit Limette und Soda").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Your custom cocktail idea 🍸");
    let recipe = &body["recipes"][0];
    assert_eq!(recipe["gins"][0], "classic");
    assert_eq!(recipe["ingredients"][0], "50 ml Gutshof Gin Classic");
    assert!(recipe["tags"]
        .as_array()
        .unwrap()
        .iter()
        .any(|t| t == "spritz"));
}

#[tokio::test]
async fn test_ask_for_edition() {
    let (_, body) = chat(app(), "").await;
    assert!(body["response"].as_str().unwrap().starts_with("Name an edition"));
    assert_eq!(body["suggestions"][0], "Show Classic");
}

#[tokio::test]
async fn test_too_long_message_is_rejected() {
    let (status, _) = chat(app(), &"a".repeat(2001)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = chat(app(), &"ä".repeat(2001)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_length_limit_counts_characters() {
    // 2000 umlauts are 4000 bytes but still within the limit
    let (status, body) = chat(app(), &"ä".repeat(2000)).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["response"].is_string());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let body = vec![b'a'; routes::BODY_LIMIT_BYTES + 1];
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/chat")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, body.len())
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_diag_norm() {
    let (status, body) = get(app(), "/diag/norm?q=Limeta").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raw"], "Limeta");
    assert_eq!(body["normalized"], "limeta");
    assert_eq!(body["intent"], "limetta");
    assert_eq!(body["strategy"], "fuzzy");
}

#[tokio::test]
async fn test_diag_env_hides_token() {
    let (status, body) = get(app(), "/diag/env").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_present"], false);
    assert!(body["domain"].is_null());
    assert_eq!(body["api_version"], "2025-01");
    assert_eq!(body["allowed_origins"][0], "*");
}

#[tokio::test]
async fn test_metrics_endpoint() {
    let response = app()
        .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
