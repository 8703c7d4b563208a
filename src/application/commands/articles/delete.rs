// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::deadline,
    domain::{article::ArticleId, errors::DomainResult},
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> DomainResult<()> {
        let id = ArticleId::new(command.id)?;
        deadline::within(self.timeout, self.write_repo.delete(id)).await?;
        tracing::info!(article_id = %id, "article deleted");
        Ok(())
    }
}
