// src/domain/author/entity.rs
use crate::domain::author::value_objects::AuthorId;
use chrono::{DateTime, Utc};

/// Owned by the author-management side; this service only reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
