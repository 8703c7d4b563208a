use crate::domain::author::{entity::Author, value_objects::AuthorId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Fails with `NotFound` when no author has this id.
    async fn get_by_id(&self, id: AuthorId) -> DomainResult<Author>;
}
