// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, StoreArticleCommand},
    dto::ArticleDto,
    queries::articles::{FetchArticlesQuery, GetArticleByIdQuery},
};
use crate::presentation::http::error::{ErrorResponse, HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ArticleIdPath;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    body::Bytes,
    extract::Query,
    http::{HeaderName, HeaderValue, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Response header carrying the cursor of the next page.
pub const CURSOR_HEADER: &str = "x-cursor";

const DEFAULT_NUM: i64 = 1;

#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchArticlesParams {
    /// Page size. Falls back to 1 when absent or not an integer.
    pub num: Option<String>,
    /// Cursor returned in `X-Cursor` by the previous page.
    pub cursor: Option<String>,
}

impl FetchArticlesParams {
    /// Builds the params from raw query pairs. A repeated key keeps its first
    /// value, so the query string itself can never fail the request.
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "num" if params.num.is_none() => params.num = Some(value),
                "cursor" if params.cursor.is_none() => params.cursor = Some(value),
                _ => {}
            }
        }
        params
    }

    fn num(&self) -> i64 {
        self.num
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(DEFAULT_NUM)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct StoreArticleRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    pub author: Option<AuthorReference>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct AuthorReference {
    /// 0 means the article has no author.
    #[serde(default)]
    pub id: i64,
}

impl StoreArticleRequest {
    fn into_command(self) -> HttpResult<StoreArticleCommand> {
        let mut builder = StoreArticleCommand::builder()
            .title(required(self.title, "title")?)
            .content(required(self.content, "content")?);

        match self.author.map(|author| author.id) {
            Some(id) if id < 0 => {
                return Err(HttpError::validation("author.id must not be negative"));
            }
            Some(id) if id > 0 => builder = builder.author_id(id),
            _ => {}
        }

        builder.build().map_err(HttpError::validation)
    }
}

fn required(value: Option<String>, field: &str) -> HttpResult<String> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(HttpError::validation(format!("{field} is required"))),
    }
}

#[utoipa::path(
    get,
    path = "/articles",
    params(FetchArticlesParams),
    responses(
        (status = 200, description = "One page of articles in id order.", body = [ArticleDto],
            headers(("x-cursor" = String, description = "Cursor of the next page, empty once exhausted."))),
        (status = 500, description = "Store failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn fetch_articles(
    Extension(state): Extension<HttpState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> HttpResult<impl IntoResponse> {
    let params = FetchArticlesParams::from_pairs(pairs);
    let query = FetchArticlesQuery {
        num: params.num(),
        cursor: params.cursor.unwrap_or_default(),
    };

    let page = state
        .services
        .article_queries
        .fetch_articles(query)
        .await
        .into_http()?;

    let next_cursor = HeaderValue::from_str(page.next_cursor_or_empty())
        .map_err(|_| HttpError::internal("next cursor is not a valid header value"))?;

    Ok((
        [(HeaderName::from_static(CURSOR_HEADER), next_cursor)],
        Json(page.items),
    ))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article with its author.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 500, description = "Store failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_queries
        .get_article_by_id(GetArticleByIdQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body = StoreArticleRequest,
    responses(
        (status = 201, description = "Created article with store-assigned id and timestamps.", body = ArticleDto),
        (status = 400, description = "Missing title or content.", body = String),
        (status = 404, description = "Referenced author does not exist.", body = ErrorResponse),
        (status = 409, description = "Article title already exists.", body = ErrorResponse),
        (status = 422, description = "Body is not a parsable article.", body = String),
        (status = 500, description = "Store failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn store_article(
    Extension(state): Extension<HttpState>,
    body: Bytes,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let payload: StoreArticleRequest =
        serde_json::from_slice(&body).map_err(|err| HttpError::malformed(err.to_string()))?;
    let command = payload.into_command()?;

    state
        .services
        .article_commands
        .store_article(command)
        .await
        .into_http()
        .map(|article| (StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 404, description = "No such article.", body = ErrorResponse),
        (status = 500, description = "Store failure or timeout.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ArticleIdPath(id): ArticleIdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
