use crate::application::dto::AuthorDto;
use crate::domain::article::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    /// `null` only for articles stored without an author reference.
    pub author: Option<AuthorDto>,
    pub updated_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl ArticleDto {
    pub fn assemble(article: Article, author: Option<AuthorDto>) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            author,
            updated_at: article.updated_at,
            created_at: article.created_at,
        }
    }
}
