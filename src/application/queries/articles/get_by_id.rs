use super::ArticleQueryService;
use crate::{
    application::{assembler::ArticleAssembler, deadline, dto::ArticleDto},
    domain::{article::ArticleId, errors::DomainResult},
};

pub struct GetArticleByIdQuery {
    pub id: i64,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(&self, query: GetArticleByIdQuery) -> DomainResult<ArticleDto> {
        let id = ArticleId::new(query.id)?;
        deadline::within(self.timeout, async {
            let article = self.read_repo.get_by_id(id).await?;
            ArticleAssembler::new(self.author_repo.as_ref())
                .assemble(article)
                .await
        })
        .await
    }
}
