// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArticleFields, CreateArticlesCommand, DeleteArticleCommand, UpdateArticlesCommand,
    },
    dto::{ArticleDto, SuccessDto, UpdateCountDto},
    error::{ApplicationError, ApplicationResult},
    queries::articles::{GetArticleQuery, ListArticlesByStateQuery},
};
use crate::domain::article::STATE_DRAFT;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::Deserialize;

fn default_state() -> String {
    STATE_DRAFT.to_string()
}

/// Article payload as accepted by the unvalidated write paths. Whatever
/// string arrives in `state` is stored unchecked.
#[derive(Debug, Deserialize)]
pub struct ArticleInput {
    pub title: String,
    pub content: String,
    #[serde(default = "default_state")]
    pub state: String,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl From<ArticleInput> for ArticleFields {
    fn from(input: ArticleInput) -> Self {
        Self {
            title: input.title,
            content: input.content,
            state: input.state,
            user_id: input.user_id,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct UpdateArticlesRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub state: Option<String>,
}

/// Split a comma-separated path segment into article ids. A malformed
/// segment is a client error, not a NaN-keyed query.
pub(crate) fn parse_id_list(raw: &str) -> ApplicationResult<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .map(|part| {
            part.parse::<i64>()
                .map_err(|_| ApplicationError::validation(format!("malformed article id '{part}'")))
        })
        .collect()
}

pub async fn create_articles(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<Vec<ArticleInput>>,
) -> HttpResult<Json<SuccessDto>> {
    let command = CreateArticlesCommand {
        articles: payload.into_iter().map(Into::into).collect(),
    };

    state
        .services
        .article_commands
        .create_articles(command)
        .await
        .into_http()?;

    Ok(Json(SuccessDto::ok()))
}

pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<Option<ArticleDto>>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

pub async fn list_articles_by_state(
    Extension(state): Extension<HttpState>,
    Path(article_state): Path<String>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles_by_state(ListArticlesByStateQuery {
            state: article_state,
        })
        .await
        .into_http()
        .map(Json)
}

pub async fn update_articles(
    Extension(state): Extension<HttpState>,
    Path(ids): Path<String>,
    Json(payload): Json<UpdateArticlesRequest>,
) -> HttpResult<Json<UpdateCountDto>> {
    let ids = parse_id_list(&ids).into_http()?;
    let command = UpdateArticlesCommand {
        ids,
        title: payload.title,
        content: payload.content,
        state: payload.state,
    };

    let count = state
        .services
        .article_commands
        .update_articles(command)
        .await
        .into_http()?;

    Ok(Json(UpdateCountDto { count }))
}

pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<ArticleDto>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()
        .map(Json)
}

#[cfg(test)]
mod tests {
    use super::parse_id_list;

    #[test]
    fn comma_list_parses_to_ids() {
        assert_eq!(parse_id_list("1,2,3").unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_id_list(" 4 , 5 ").unwrap(), vec![4, 5]);
        assert_eq!(parse_id_list("42").unwrap(), vec![42]);
    }

    #[test]
    fn malformed_segments_are_rejected() {
        assert!(parse_id_list("1,two").is_err());
        assert!(parse_id_list("").is_err());
        assert!(parse_id_list("1,,2").is_err());
    }
}
