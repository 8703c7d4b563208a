use std::{sync::Arc, time::Duration};

use crate::domain::{article::ArticleReadRepository, author::AuthorRepository};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) author_repo: Arc<dyn AuthorRepository>,
    pub(super) timeout: Duration,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        author_repo: Arc<dyn AuthorRepository>,
        timeout: Duration,
    ) -> Self {
        Self {
            read_repo,
            author_repo,
            timeout,
        }
    }
}
