// src/presentation/http/middleware.rs
use axum::http::{HeaderName, Method};
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};

/// Cross-origin policy: every response carries `Access-Control-Allow-Origin: *`.
pub fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(super::controllers::articles::CURSOR_HEADER)])
        .max_age(Duration::from_secs(3600))
}
