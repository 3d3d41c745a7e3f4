pub mod category;
pub mod chat;
pub mod recipe;
