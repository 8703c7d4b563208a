// src/presentation/http/extractors.rs
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::HttpError;

/// `{id}` path segment restricted to a positive integer.
///
/// Anything else is answered with 404, as if no route had matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArticleIdPath(pub i64);

impl<S> FromRequestParts<S> for ArticleIdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| HttpError::not_found("resource not found"))?;

        match raw.parse::<i64>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(HttpError::not_found("resource not found")),
        }
    }
}
