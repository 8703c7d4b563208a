// src/application/commands/articles/store.rs
use super::ArticleCommandService;
use crate::{
    application::{assembler::ArticleAssembler, deadline, dto::ArticleDto},
    domain::{article::NewArticle, author::AuthorId, errors::DomainResult},
};

/// Already validated by the delivery layer.
#[derive(Debug)]
pub struct StoreArticleCommand {
    pub title: String,
    pub content: String,
    pub author_id: Option<i64>,
}

impl StoreArticleCommand {
    pub fn builder() -> StoreArticleCommandBuilder {
        StoreArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct StoreArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    author_id: Option<i64>,
}

impl StoreArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub const fn author_id(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn build(self) -> Result<StoreArticleCommand, &'static str> {
        Ok(StoreArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            author_id: self.author_id,
        })
    }
}

impl ArticleCommandService {
    pub async fn store_article(&self, command: StoreArticleCommand) -> DomainResult<ArticleDto> {
        let mut new_article = NewArticle::new(command.title, command.content);
        if let Some(author_id) = command.author_id {
            new_article = new_article.with_author(AuthorId::new(author_id)?);
        }

        let created = deadline::within(self.timeout, async {
            let created = self.write_repo.store(new_article).await?;
            ArticleAssembler::new(self.author_repo.as_ref())
                .assemble(created)
                .await
        })
        .await?;

        tracing::info!(article_id = created.id, "article stored");
        Ok(created)
    }
}
