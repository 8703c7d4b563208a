use super::ArticleQueryService;
use crate::{
    application::{
        assembler::ArticleAssembler,
        deadline,
        dto::{ArticleDto, CursorPage},
    },
    domain::{article::ArticleCursor, errors::DomainResult},
};

const MAX_LIMIT: u32 = 100;

pub struct FetchArticlesQuery {
    /// Opaque token from a previous page; empty starts from the beginning.
    pub cursor: String,
    pub num: i64,
}

impl ArticleQueryService {
    pub async fn fetch_articles(
        &self,
        query: FetchArticlesQuery,
    ) -> DomainResult<CursorPage<ArticleDto>> {
        let limit = normalize_limit(query.num);
        let cursor = decode_cursor(&query.cursor)?;

        deadline::within(self.timeout, async {
            let (records, next_cursor) = self.read_repo.fetch(cursor, limit).await?;
            let items = ArticleAssembler::new(self.author_repo.as_ref())
                .assemble_all(records)
                .await?;
            Ok(CursorPage::new(
                items,
                next_cursor.map(|cursor| cursor.encode()),
            ))
        })
        .await
    }
}

fn normalize_limit(num: i64) -> u32 {
    u32::try_from(num.clamp(1, i64::from(MAX_LIMIT))).unwrap_or(1)
}

fn decode_cursor(token: &str) -> DomainResult<Option<ArticleCursor>> {
    let token = token.trim();
    if token.is_empty() {
        return Ok(None);
    }
    ArticleCursor::decode(token).map(Some)
}
