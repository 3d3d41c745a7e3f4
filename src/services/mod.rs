pub mod catalog;
pub mod concierge;
pub mod ingredients;
pub mod intent;
pub mod normalize;
pub mod recipe_book;
pub mod similarity;
pub mod storefront;
pub mod synthesizer;
pub mod topic_guard;
