// src/application/commands/articles/service.rs
use std::{sync::Arc, time::Duration};

use crate::domain::{article::ArticleWriteRepository, author::AuthorRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) timeout: Duration,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        timeout: Duration,
    ) -> Self {
        Self {
            write_repo,
            author_repo,
            timeout,
        }
    }
}
