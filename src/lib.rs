//! Gutshof Gin shop assistant
//!
//! This library holds the chat assistant behind the Gutshof Gin storefront:
//! a topic guard that keeps conversations about gin, layered matching of
//! free text onto the gin editions, ingredient extraction and a rule-based
//! cocktail synthesizer, plus the axum routes that serve them.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

pub use services::concierge::{ChatPlan, Concierge};
pub use services::normalize::normalize;
