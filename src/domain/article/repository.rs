use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleCursor, ArticleId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Inserts the article and returns it with the store-assigned id and timestamps.
    async fn store(&self, article: NewArticle) -> DomainResult<Article>;
    /// Hard delete. `NotFound` when no row was affected.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article>;

    /// Returns at most `limit` articles in ascending id order, strictly after
    /// `cursor`. The returned cursor is `None` once the listing is exhausted.
    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)>;
}
