// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::articles,
    middleware,
    openapi::{self, StatusResponse},
};
use axum::{Extension, Router, routing::get};
use tower_http::trace::TraceLayer;

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route(
            "/articles",
            get(articles::fetch_articles).post(articles::store_article),
        )
        .route(
            "/articles/{id}",
            get(articles::get_article).delete(articles::delete_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .layer(Extension(state))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
