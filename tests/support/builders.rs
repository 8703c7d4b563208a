// tests/support/builders.rs
use clean_arch::domain::article::NewArticle;
use clean_arch::domain::author::{Author, AuthorId};

use super::mocks::fixed_now;

pub struct AuthorBuilder {
    id: i64,
    name: String,
    email: String,
}

impl AuthorBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Author {id}"),
            email: format!("author{id}@example.com"),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Author {
        Author {
            id: AuthorId::new(self.id).unwrap(),
            name: self.name,
            email: self.email,
            created_at: fixed_now(),
            updated_at: fixed_now(),
        }
    }
}

pub struct NewArticleBuilder {
    title: String,
    content: String,
    author_id: Option<i64>,
}

impl NewArticleBuilder {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: "Test content".into(),
            author_id: None,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = Some(author_id);
        self
    }

    pub fn build(self) -> NewArticle {
        let article = NewArticle::new(self.title, self.content);
        match self.author_id {
            Some(id) => article.with_author(AuthorId::new(id).unwrap()),
            None => article,
        }
    }
}
