// src/domain/article/entity.rs
use crate::domain::article::value_objects::ArticleId;
use crate::domain::user::UserId;

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub state: String,
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: String,
    pub content: String,
    pub state: String,
    pub user_id: Option<UserId>,
}

/// Partial update applied to a set of articles at once. `None` fields are
/// left untouched.
#[derive(Debug, Clone, Default)]
pub struct ArticlePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub state: Option<String>,
}

impl ArticlePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.state.is_none()
    }
}
