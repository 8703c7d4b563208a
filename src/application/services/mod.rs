// src/application/services/mod.rs
use std::{sync::Arc, time::Duration};

use crate::{
    application::{commands::articles::ArticleCommandService, queries::articles::ArticleQueryService},
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        author::AuthorRepository,
    },
};

/// Usecase layer handed to the delivery layer. Built once at startup from
/// explicitly injected repositories and the configured per-call timeout.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        timeout: Duration,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&author_repo),
            timeout,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&author_repo),
            timeout,
        ));

        Self {
            article_commands,
            article_queries,
        }
    }
}
