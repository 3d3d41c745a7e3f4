use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use garde::Validate;
use std::time::Instant;
use tracing::info;

use crate::app_state::AppState;
use crate::models::category::Category;
use crate::models::chat::{ChatRequest, ChatResponse};
use crate::models::recipe::RecipeCard;
use crate::services::concierge::ChatPlan;

const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Show Rotkäppchen",
    "Food pairing Classic",
    "Recipe with Froschkönig",
    "Gift ideas",
    "Cocktail ideas",
];

fn edition_heading(category: Category) -> String {
    let emoji = match category {
        Category::Rotkaeppchen | Category::Rosata => "🍓",
        Category::Froschkoenig => "👑🐸",
        Category::Aschenputtel => "✨",
        Category::Sterntaler => "⭐️",
        Category::Classic => "🥃",
        Category::Limetta => "🍋",
        Category::Mandarina => "🍊",
    };
    format!("Here is {} {emoji}", category.title())
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    (!items.is_empty()).then_some(items)
}

/// POST /chat: answer one message from the shop assistant.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, (StatusCode, String)> {
    request
        .validate()
        .map_err(|report| (StatusCode::UNPROCESSABLE_ENTITY, report.to_string()))?;

    let start = Instant::now();
    let message = request.message.trim();
    let plan = state.concierge.plan(message, &mut rand::thread_rng());
    let outcome = plan.outcome();

    let response = render(&state, plan).await;

    metrics::counter!("chat_requests_total", "outcome" => outcome).increment(1);
    metrics::histogram!("chat_processing_seconds").record(start.elapsed().as_secs_f64());
    info!(outcome, elapsed_ms = start.elapsed().as_millis() as u64, "Chat message answered");

    Ok(Json(response))
}

async fn render(state: &AppState, plan: ChatPlan) -> ChatResponse {
    match plan {
        ChatPlan::OffTopic => ChatResponse::text(
            "I can only help with Gutshof Gin: products, recipes, cocktail ideas, \
             food pairing, gift ideas and FAQs.",
        )
        .with_suggestions(DEFAULT_SUGGESTIONS.iter().copied()),

        ChatPlan::Greeting => ChatResponse::text(
            "Hello! Fancy a recommendation, a recipe, a food pairing or a gift idea?",
        )
        .with_suggestions(DEFAULT_SUGGESTIONS.iter().copied()),

        ChatPlan::Faq(topic) => ChatResponse::text(topic.answer())
            .with_suggestions(DEFAULT_SUGGESTIONS.iter().copied()),

        ChatPlan::AskForIngredients => ChatResponse::text(
            "Tell me some ingredients, e.g. \"Make me a cocktail with lime, basil and soda.\"",
        )
        .with_suggestions([
            "Cocktail with lime & basil",
            "Drink with orange & Campari",
            "Fruity: strawberry & soda",
        ]),

        ChatPlan::CustomCocktail(recipe) => ChatResponse {
            recipes: Some(vec![RecipeCard::from(*recipe)]),
            ..ChatResponse::text("Your custom cocktail idea 🍸")
        }
        .with_suggestions(["Another variation?", "Show matching products", "Food pairing"]),

        ChatPlan::ClassicIdeas { prefer } => ChatResponse {
            recipes: non_empty(state.recipes.classic_suggestions(prefer)),
            ..ChatResponse::text("Here are cocktail ideas that work great with our gins:")
        }
        .with_suggestions(["Make me something with lime", "Food pairing tip", "Show Rotkäppchen"]),

        ChatPlan::BrowseCatalogue => {
            let products = state.storefront.search_or_empty("Gin").await;
            if products.is_empty() {
                ChatResponse::text("I found nothing fitting. Try e.g. \"Show Rotkäppchen\".")
            } else {
                ChatResponse {
                    products: Some(products),
                    ..ChatResponse::text("Here are a few gins from our range:")
                }
                .with_suggestions(DEFAULT_SUGGESTIONS.iter().copied())
            }
        }

        ChatPlan::AskForEdition => ChatResponse::text(
            "Name an edition (Rotkäppchen, Froschkönig, Aschenputtel, Sterntaler, Classic, \
             Limetta, Mandarina, Rosata) or list ingredients for a cocktail.",
        )
        .with_suggestions([
            "Show Classic",
            "Cocktail with lemon & soda",
            "Food pairing Rotkäppchen",
        ]),

        ChatPlan::Edition {
            category,
            wants_recipe,
            wants_pairing,
        } => {
            let products = state.storefront.find_products_for(category).await;
            let mut recipes = if wants_recipe {
                state.recipes.recipes_for(category)
            } else {
                Vec::new()
            };
            // One matching classic as a teaser
            if recipes.is_empty() {
                recipes.extend(state.recipes.classic_suggestions(Some(category)).into_iter().take(1));
            }

            ChatResponse {
                products: non_empty(products),
                recipes: non_empty(recipes),
                pairings: if wants_pairing {
                    state.recipes.pairings_for(category)
                } else {
                    None
                },
                ..ChatResponse::text(edition_heading(category))
            }
            .with_suggestions(DEFAULT_SUGGESTIONS.iter().copied())
        }
    }
}
