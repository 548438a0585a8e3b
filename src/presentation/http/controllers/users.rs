// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::{
        articles::CreateUserArticleCommand,
        users::CreateUserCommand,
    },
    dto::{ArticleDto, SuccessDto, UserWithArticlesDto},
    queries::users::GetUserWithArticlesQuery,
    validation::ArticleDraft,
};
use crate::presentation::http::controllers::articles::ArticleInput;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    #[serde(default)]
    pub articles: Vec<ArticleInput>,
}

pub async fn create_user(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateUserRequest>,
) -> HttpResult<Json<SuccessDto>> {
    let command = CreateUserCommand {
        email: payload.email,
        articles: payload.articles.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .user_commands
        .create_user(command)
        .await
        .into_http()?;

    Ok(Json(SuccessDto::ok()))
}

pub async fn create_user_article(
    Extension(state): Extension<HttpState>,
    Path(user_id): Path<i64>,
    Json(draft): Json<ArticleDraft>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .create_user_article(CreateUserArticleCommand { user_id, draft })
        .await
        .into_http()
        .map(Json)
}

pub async fn get_user_with_articles(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Option<UserWithArticlesDto>>> {
    state
        .services
        .user_queries
        .get_user_with_articles(GetUserWithArticlesQuery { id })
        .await
        .into_http()
        .map(Json)
}
