use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::app_state::AppState;
use crate::models::category::Category;
use crate::services::intent::MatchStrategy;
use crate::services::normalize::normalize;

#[derive(Serialize)]
pub struct EnvReport {
    pub domain: Option<String>,
    pub token_present: bool,
    pub api_version: String,
    pub allowed_origins: Vec<String>,
    pub shop_url_base: String,
}

/// GET /diag/env: storefront wiring, without secrets.
pub async fn env_report(State(state): State<AppState>) -> Json<EnvReport> {
    let storefront = &state.storefront;
    let domain = storefront.domain();
    Json(EnvReport {
        domain: (!domain.is_empty()).then(|| domain.to_string()),
        token_present: storefront.token_present(),
        api_version: storefront.api_version().to_string(),
        allowed_origins: state.allowed_origins.to_vec(),
        shop_url_base: storefront.shop_url_base().to_string(),
    })
}

#[derive(Deserialize)]
pub struct NormQuery {
    #[serde(default)]
    pub q: String,
}

#[derive(Serialize)]
pub struct NormReport {
    pub raw: String,
    pub normalized: String,
    pub intent: Option<Category>,
    pub strategy: Option<MatchStrategy>,
}

/// GET /diag/norm?q=: how a message is normalized and classified.
pub async fn norm_report(
    State(state): State<AppState>,
    Query(query): Query<NormQuery>,
) -> Json<NormReport> {
    let matched = state.concierge.classify_intent(&query.q);
    Json(NormReport {
        normalized: normalize(&query.q),
        intent: matched.as_ref().map(|m| m.category),
        strategy: matched.map(|m| m.strategy),
        raw: query.q,
    })
}
