mod fetch;
mod get_by_id;
mod service;

pub use fetch::FetchArticlesQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use service::ArticleQueryService;
