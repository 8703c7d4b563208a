// tests/support/mocks/article_repos.rs
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Duration as ChronoDuration;

use clean_arch::domain::article::{
    Article, ArticleCursor, ArticleId, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use clean_arch::domain::errors::{DomainError, DomainResult};

use super::author_repo::InMemoryAuthorRepo;
use super::time::fixed_now;

/* -------------------------------- in-memory store -------------------------------- */

#[derive(Default)]
struct Rows {
    last_id: i64,
    rows: BTreeMap<i64, Article>,
}

/// Article store backed by a `BTreeMap`, honouring the same contract as the
/// Postgres repositories (id order, unique titles, store-assigned fields).
///
/// With an author table attached, an unknown `author_id` is rejected before
/// anything is written, like the `articles_author_id_fkey` constraint.
/// Without one, rows may reference any author, which lets tests seed articles
/// whose author lookup later fails.
#[derive(Default)]
pub struct InMemoryArticleRepo {
    inner: Mutex<Rows>,
    authors: Option<Arc<InMemoryAuthorRepo>>,
}

impl InMemoryArticleRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_author_table(authors: Arc<InMemoryAuthorRepo>) -> Self {
        Self {
            inner: Mutex::default(),
            authors: Some(authors),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.inner.lock().unwrap().rows.contains_key(&id)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn store(&self, article: NewArticle) -> DomainResult<Article> {
        if let (Some(authors), Some(author_id)) = (&self.authors, article.author_id) {
            if !authors.contains(author_id) {
                return Err(DomainError::not_found("author not found"));
            }
        }

        let mut inner = self.inner.lock().unwrap();
        if inner.rows.values().any(|row| row.title == article.title) {
            return Err(DomainError::conflict("article title already exists"));
        }

        inner.last_id += 1;
        let id = inner.last_id;
        let now = fixed_now() + ChronoDuration::seconds(id);
        let stored = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            author_id: article.author_id,
            created_at: now,
            updated_at: now,
        };
        inner.rows.insert(id, stored.clone());
        Ok(stored)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner
            .rows
            .remove(&i64::from(id))
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("article not found"))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn get_by_id(&self, id: ArticleId) -> DomainResult<Article> {
        let inner = self.inner.lock().unwrap();
        inner
            .rows
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("article not found"))
    }

    async fn fetch(
        &self,
        cursor: Option<ArticleCursor>,
        limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        let inner = self.inner.lock().unwrap();
        let lower = cursor.map_or(Bound::Unbounded, |c| Bound::Excluded(i64::from(c.last_id)));
        let limit = limit.max(1) as usize;

        let mut page: Vec<Article> = inner
            .rows
            .range((lower, Bound::Unbounded))
            .take(limit + 1)
            .map(|(_, article)| article.clone())
            .collect();

        let mut next_cursor = None;
        if page.len() > limit {
            page.pop();
            next_cursor = page.last().map(|last| ArticleCursor::after(last.id));
        }
        Ok((page, next_cursor))
    }
}

/* -------------------------------- failing store -------------------------------- */

/// Every call fails with the configured error.
pub struct FailingArticleRepo {
    pub error: DomainError,
}

impl FailingArticleRepo {
    pub fn new(error: DomainError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl ArticleWriteRepository for FailingArticleRepo {
    async fn store(&self, _article: NewArticle) -> DomainResult<Article> {
        Err(self.error.clone())
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        Err(self.error.clone())
    }
}

#[async_trait]
impl ArticleReadRepository for FailingArticleRepo {
    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        Err(self.error.clone())
    }

    async fn fetch(
        &self,
        _cursor: Option<ArticleCursor>,
        _limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        Err(self.error.clone())
    }
}

/* -------------------------------- slow store -------------------------------- */

/// Sleeps before answering, to exercise the usecase deadline.
pub struct SlowArticleRepo {
    pub delay: Duration,
}

#[async_trait]
impl ArticleWriteRepository for SlowArticleRepo {
    async fn store(&self, _article: NewArticle) -> DomainResult<Article> {
        tokio::time::sleep(self.delay).await;
        Err(DomainError::internal("slow store finished"))
    }

    async fn delete(&self, _id: ArticleId) -> DomainResult<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for SlowArticleRepo {
    async fn get_by_id(&self, _id: ArticleId) -> DomainResult<Article> {
        tokio::time::sleep(self.delay).await;
        Err(DomainError::not_found("article not found"))
    }

    async fn fetch(
        &self,
        _cursor: Option<ArticleCursor>,
        _limit: u32,
    ) -> DomainResult<(Vec<Article>, Option<ArticleCursor>)> {
        tokio::time::sleep(self.delay).await;
        Ok((vec![], None))
    }
}
