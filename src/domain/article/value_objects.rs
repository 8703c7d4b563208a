use crate::domain::errors::{DomainError, DomainResult};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(i64);

impl ArticleId {
    /// Store-assigned ids are always positive, so anything else cannot match a row.
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::not_found("article not found"))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<ArticleId> for i64 {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position in the id-ordered article listing. Clients only ever see the
/// encoded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleCursor {
    pub last_id: ArticleId,
}

impl ArticleCursor {
    pub const fn after(last_id: ArticleId) -> Self {
        Self { last_id }
    }

    pub fn encode(&self) -> String {
        URL_SAFE_NO_PAD.encode(i64::from(self.last_id).to_string().as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::internal(format!("invalid cursor: {token}"));
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let id = raw.parse::<i64>().map_err(|_| invalid())?;
        let last_id = ArticleId::new(id).map_err(|_| invalid())?;
        Ok(Self::after(last_id))
    }
}
