// src/application/queries/articles/get_by_id.rs
use super::ArticleQueryService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct GetArticleQuery {
    pub id: i64,
}

impl ArticleQueryService {
    /// First article matching the id, or `None`. The HTTP layer serialises
    /// the miss as JSON null with 200; it is not a 404.
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<Option<ArticleDto>> {
        let id = ArticleId::new(query.id)?;
        let article = self.read_repo.find_by_id(id).await?;
        Ok(article.map(Into::into))
    }
}
