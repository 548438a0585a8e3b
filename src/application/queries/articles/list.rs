// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

pub struct ListArticlesByStateQuery {
    pub state: String,
}

/// Offset/limit variant of the listing. No route serves it yet.
pub struct ListArticlesPageQuery {
    pub skip: u32,
    pub take: u32,
}

impl ArticleQueryService {
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Filtered listing by raw state string. An unrecognised state is not
    /// an error; it just matches nothing.
    pub async fn list_articles_by_state(
        &self,
        query: ListArticlesByStateQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_by_state(&query.state).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    pub async fn list_articles_page(
        &self,
        query: ListArticlesPageQuery,
    ) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_page(query.skip, query.take).await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
