// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{articles, users};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Router,
    http::Method,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(index))
        .route(
            "/articles",
            get(articles::list_articles).post(articles::create_articles),
        )
        .route(
            "/articles/state/{state}",
            get(articles::list_articles_by_state),
        )
        // PUT takes a comma-separated id list in the same segment the other
        // methods read a single id from.
        .route(
            "/articles/{id}",
            get(articles::get_article)
                .put(articles::update_articles)
                .delete(articles::delete_article),
        )
        .route("/users", post(users::create_user))
        .route(
            "/users/{id}/articles",
            get(users::get_user_with_articles).post(users::create_user_article),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

pub async fn index() -> &'static str {
    "Hello, World!"
}
