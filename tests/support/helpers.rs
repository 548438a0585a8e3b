// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::InMemoryStore;
use gazette::application::services::ApplicationServices;
use gazette::domain::article::{ArticleReadRepository, ArticleWriteRepository};
use gazette::domain::user::UserRepository;
use gazette::presentation::http::{routes::build_router, state::HttpState};

/// Router wired against a single in-memory store, returned alongside the
/// store so tests can seed and inspect it directly.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::default());

    let article_write: Arc<dyn ArticleWriteRepository> = store.clone();
    let article_read: Arc<dyn ArticleReadRepository> = store.clone();
    let user_repo: Arc<dyn UserRepository> = store.clone();

    let services = Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        user_repo,
    ));
    let state = HttpState { services };

    (build_router(state), store)
}

pub async fn send(
    router: &axum::Router,
    method: &str,
    uri: &str,
    json_body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match json_body {
        Some(value) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&value).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ))
    };

    (status, value)
}
