// src/presentation/http/openapi.rs
use axum::{Json, Router, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::fetch_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::store_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::StoreArticleRequest,
            crate::presentation::http::controllers::articles::AuthorReference,
            crate::application::dto::ArticleDto,
            crate::application::dto::AuthorDto
        )
    ),
    tags(
        (name = "Articles", description = "Article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Article API",
        description = "Clean-architecture article service",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

pub fn docs_router() -> Router {
    Router::new().route(OPENAPI_JSON_PATH, get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
