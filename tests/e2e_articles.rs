// tests/e2e_articles.rs
use axum::http::StatusCode;
use serde_json::{Value, json};

mod support;

use support::helpers::{make_test_router, send};

#[tokio::test]
async fn root_returns_plain_greeting() {
    let (app, _store) = make_test_router();

    let (status, body) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("Hello, World!".into()));
}

#[tokio::test]
async fn bulk_create_acknowledges_without_echoing_records() {
    let (app, store) = make_test_router();

    let payload = json!([
        {"title": "first", "content": "one", "state": "DRAFT"},
        {"title": "second", "content": "two", "state": "PUBLISHED"}
    ]);
    let (status, body) = send(&app, "POST", "/articles", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true}));
    assert_eq!(store.article_count(), 2);
}

#[tokio::test]
async fn bulk_create_defaults_missing_state_to_draft() {
    let (app, _store) = make_test_router();

    let payload = json!([{"title": "no state", "content": "body"}]);
    let (status, _) = send(&app, "POST", "/articles", Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, articles) = send(&app, "GET", "/articles", None).await;
    assert_eq!(articles[0]["state"], "DRAFT");
}

#[tokio::test]
async fn get_by_id_returns_created_fields() {
    let (app, _store) = make_test_router();

    let payload = json!([{"title": "hello", "content": "world", "state": "DRAFT"}]);
    send(&app, "POST", "/articles", Some(payload)).await;

    let (_, articles) = send(&app, "GET", "/articles", None).await;
    let id = articles[0]["id"].as_i64().unwrap();

    let (status, body) = send(&app, "GET", &format!("/articles/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "hello");
    assert_eq!(body["content"], "world");
    assert_eq!(body["state"], "DRAFT");
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn get_unknown_id_returns_null_with_200() {
    let (app, _store) = make_test_router();

    let (status, body) = send(&app, "GET", "/articles/99", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);
}

#[tokio::test]
async fn list_by_state_returns_exactly_the_matching_set() {
    let (app, _store) = make_test_router();

    let payload = json!([
        {"title": "a", "content": "x", "state": "DRAFT"},
        {"title": "b", "content": "y", "state": "PUBLISHED"},
        {"title": "c", "content": "z", "state": "DRAFT"}
    ]);
    send(&app, "POST", "/articles", Some(payload)).await;

    let (status, body) = send(&app, "GET", "/articles/state/DRAFT", None).await;
    assert_eq!(status, StatusCode::OK);
    let drafts = body.as_array().unwrap();
    assert_eq!(drafts.len(), 2);
    assert!(drafts.iter().all(|a| a["state"] == "DRAFT"));
}

#[tokio::test]
async fn list_by_unrecognised_state_yields_empty_list() {
    let (app, _store) = make_test_router();

    send(
        &app,
        "POST",
        "/articles",
        Some(json!([{"title": "a", "content": "x", "state": "DRAFT"}])),
    )
    .await;

    let (status, body) = send(&app, "GET", "/articles/state/LIMBO", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn bulk_update_reports_count_and_persists_state() {
    let (app, _store) = make_test_router();

    let payload = json!([
        {"title": "a", "content": "x", "state": "DRAFT"},
        {"title": "b", "content": "y", "state": "DRAFT"}
    ]);
    send(&app, "POST", "/articles", Some(payload)).await;

    let (status, body) = send(
        &app,
        "PUT",
        "/articles/1,2",
        Some(json!({"state": "PUBLISHED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 2}));

    let (_, articles) = send(&app, "GET", "/articles", None).await;
    for article in articles.as_array().unwrap() {
        assert_eq!(article["state"], "PUBLISHED");
    }
}

#[tokio::test]
async fn bulk_update_counts_only_matching_ids() {
    let (app, _store) = make_test_router();

    send(
        &app,
        "POST",
        "/articles",
        Some(json!([{"title": "a", "content": "x", "state": "DRAFT"}])),
    )
    .await;

    let (status, body) = send(
        &app,
        "PUT",
        "/articles/1,42",
        Some(json!({"state": "PUBLISHED"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"count": 1}));
}

#[tokio::test]
async fn malformed_id_list_is_a_client_error() {
    let (app, _store) = make_test_router();

    let (status, body) = send(
        &app,
        "PUT",
        "/articles/1,two",
        Some(json!({"state": "PUBLISHED"})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].as_str().unwrap().contains("two"));
}

#[tokio::test]
async fn update_with_empty_payload_is_rejected() {
    let (app, _store) = make_test_router();

    send(
        &app,
        "POST",
        "/articles",
        Some(json!([{"title": "a", "content": "x", "state": "DRAFT"}])),
    )
    .await;

    let (status, _) = send(&app, "PUT", "/articles/1", Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn delete_returns_the_deleted_record() {
    let (app, store) = make_test_router();

    send(
        &app,
        "POST",
        "/articles",
        Some(json!([{"title": "gone", "content": "soon", "state": "DRAFT"}])),
    )
    .await;

    let (status, body) = send(&app, "DELETE", "/articles/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "gone");
    assert_eq!(store.article_count(), 0);
}

#[tokio::test]
async fn delete_of_missing_article_is_an_error_not_a_200() {
    let (app, _store) = make_test_router();

    let (status, body) = send(&app, "DELETE", "/articles/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("title").is_none());
    assert!(!body["message"].as_str().unwrap().is_empty());
}
