use crate::domain::article::entity::{Article, ArticlePatch, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Insert a single article and return it with its generated id.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Insert a batch of articles in one statement, returning the number of
    /// rows written. Created records are not echoed back.
    async fn insert_many(&self, articles: Vec<NewArticle>) -> DomainResult<u64>;

    /// Apply the same patch to every article in `ids`, returning the number
    /// of rows affected. Ids with no matching row simply do not count.
    async fn update_many(&self, ids: &[ArticleId], patch: ArticlePatch) -> DomainResult<u64>;

    /// Delete exactly one article and return it. Errors with `NotFound`
    /// when no row matches.
    async fn delete(&self, id: ArticleId) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Article>>;

    /// Offset/limit variant of `list`. Not wired to any route today; kept
    /// for the eventual paginated listing.
    async fn list_page(&self, skip: u32, take: u32) -> DomainResult<Vec<Article>>;

    /// All articles whose state column equals `state`, compared as a raw
    /// string. Unknown states yield an empty list rather than an error.
    async fn list_by_state(&self, state: &str) -> DomainResult<Vec<Article>>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
}
