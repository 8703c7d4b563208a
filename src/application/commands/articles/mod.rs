// src/application/commands/articles/mod.rs
mod delete;
mod service;
mod store;

pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use store::{StoreArticleCommand, StoreArticleCommandBuilder};
