// tests/support/mocks/author_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use clean_arch::domain::author::{Author, AuthorId, AuthorRepository};
use clean_arch::domain::errors::{DomainError, DomainResult};

/// Author lookup backed by a map; counts lookups so tests can check memoization.
#[derive(Default)]
pub struct InMemoryAuthorRepo {
    authors: Mutex<HashMap<i64, Author>>,
    lookups: AtomicUsize,
}

impl InMemoryAuthorRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_authors(authors: impl IntoIterator<Item = Author>) -> Self {
        let repo = Self::new();
        for author in authors {
            repo.insert(author);
        }
        repo
    }

    pub fn insert(&self, author: Author) {
        self.authors
            .lock()
            .unwrap()
            .insert(i64::from(author.id), author);
    }

    /// Existence check that does not count as a lookup.
    pub fn contains(&self, id: AuthorId) -> bool {
        self.authors.lock().unwrap().contains_key(&i64::from(id))
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorRepo {
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Author> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.authors
            .lock()
            .unwrap()
            .get(&i64::from(id))
            .cloned()
            .ok_or_else(|| DomainError::not_found("author not found"))
    }
}

/// Every lookup fails with the configured error.
pub struct FailingAuthorRepo {
    pub error: DomainError,
}

#[async_trait]
impl AuthorRepository for FailingAuthorRepo {
    async fn get_by_id(&self, _id: AuthorId) -> DomainResult<Author> {
        Err(self.error.clone())
    }
}
