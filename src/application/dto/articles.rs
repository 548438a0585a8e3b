use crate::domain::article::Article;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub state: String,
    pub user_id: Option<i64>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title,
            content: article.content,
            state: article.state,
            user_id: article.user_id.map(Into::into),
        }
    }
}

/// Acknowledgment body for the bulk-create endpoints, which do not echo the
/// created records back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessDto {
    pub success: bool,
}

impl SuccessDto {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Body for the bulk update endpoint: affected row count, not the records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCountDto {
    pub count: u64,
}
