// src/application/assembler.rs
use crate::{
    application::dto::{ArticleDto, AuthorDto},
    domain::{
        article::Article,
        author::{AuthorId, AuthorRepository},
        errors::DomainResult,
    },
};
use std::collections::HashMap;

/// Turns persisted articles into DTOs with their author resolved.
///
/// Authors are looked up once per call; a failed lookup fails the whole call.
pub(crate) struct ArticleAssembler<'a> {
    author_repo: &'a dyn AuthorRepository,
    resolved: HashMap<AuthorId, AuthorDto>,
}

impl<'a> ArticleAssembler<'a> {
    pub(crate) fn new(author_repo: &'a dyn AuthorRepository) -> Self {
        Self {
            author_repo,
            resolved: HashMap::new(),
        }
    }

    pub(crate) async fn assemble(&mut self, article: Article) -> DomainResult<ArticleDto> {
        let author = match article.author_id {
            Some(author_id) => Some(self.resolve(author_id).await?),
            None => None,
        };
        Ok(ArticleDto::assemble(article, author))
    }

    pub(crate) async fn assemble_all(
        &mut self,
        articles: Vec<Article>,
    ) -> DomainResult<Vec<ArticleDto>> {
        let mut items = Vec::with_capacity(articles.len());
        for article in articles {
            items.push(self.assemble(article).await?);
        }
        Ok(items)
    }

    async fn resolve(&mut self, author_id: AuthorId) -> DomainResult<AuthorDto> {
        if let Some(author) = self.resolved.get(&author_id) {
            return Ok(author.clone());
        }
        let author: AuthorDto = self.author_repo.get_by_id(author_id).await?.into();
        self.resolved.insert(author_id, author.clone());
        Ok(author)
    }
}
