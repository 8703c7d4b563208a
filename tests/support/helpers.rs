// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use clean_arch::application::services::ApplicationServices;
use clean_arch::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use clean_arch::domain::author::AuthorRepository;
use clean_arch::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::{InMemoryArticleRepo, InMemoryAuthorRepo};

pub const TEST_TIMEOUT: Duration = Duration::from_secs(2);

pub fn build_services(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
    authors: Arc<dyn AuthorRepository>,
    timeout: Duration,
) -> ApplicationServices {
    ApplicationServices::new(read, write, authors, timeout)
}

pub fn make_router_with(
    read: Arc<dyn ArticleReadRepository>,
    write: Arc<dyn ArticleWriteRepository>,
    authors: Arc<dyn AuthorRepository>,
    timeout: Duration,
) -> Router {
    let services = Arc::new(build_services(read, write, authors, timeout));
    build_router(HttpState { services })
}

/// Router over in-memory repositories, with handles to the stores so tests
/// can seed and inspect them.
pub struct TestApp {
    pub router: Router,
    pub articles: Arc<InMemoryArticleRepo>,
    pub authors: Arc<InMemoryAuthorRepo>,
}

pub fn make_test_app() -> TestApp {
    make_test_app_with_authors(InMemoryAuthorRepo::new())
}

pub fn make_test_app_with_authors(authors: InMemoryAuthorRepo) -> TestApp {
    let authors = Arc::new(authors);
    let articles = Arc::new(InMemoryArticleRepo::with_author_table(authors.clone()));
    let router = make_router_with(
        articles.clone(),
        articles.clone(),
        authors.clone(),
        TEST_TIMEOUT,
    );
    TestApp {
        router,
        articles,
        authors,
    }
}

pub async fn send(router: &Router, req: Request<Body>) -> Response {
    router.clone().oneshot(req).await.expect("router is infallible")
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: impl Into<String>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json; charset=utf-8")
        .body(Body::from(body.into()))
        .unwrap()
}

/// Splits a response into status, headers and parsed JSON body
/// (`Value::Null` for an empty body).
pub async fn into_parts_json(resp: Response) -> (StatusCode, HeaderMap, Value) {
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("expected valid json body")
    };
    (status, parts.headers, json)
}

/// Asserts a `{"message": ...}` error envelope with the expected status.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode) -> String {
    let (status, headers, json) = into_parts_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let ct = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let message = json
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    assert!(!message.is_empty(), "expected non-empty message, body: {json}");
    message
}

/// Asserts a bare JSON string error body with the expected status.
pub async fn assert_bare_error_response(resp: Response, expected_status: StatusCode) -> String {
    let (status, headers, json) = into_parts_json(resp).await;
    assert_eq!(status, expected_status, "unexpected status, body: {json}");
    let ct = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    let message = json
        .as_str()
        .unwrap_or_else(|| panic!("expected a JSON string body, got: {json}"))
        .to_string();
    assert!(!message.is_empty(), "expected non-empty message");
    message
}

/// Stores an article through the HTTP surface and returns its JSON.
pub async fn create_article(router: &Router, title: &str, content: &str) -> Value {
    let body = serde_json::json!({ "title": title, "content": content }).to_string();
    let resp = send(router, post_json("/articles", body)).await;
    let (status, _, json) = into_parts_json(resp).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {json}");
    json
}
