use crate::domain::article::NewArticle;
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::{NewUser, User, UserWithRelations};
use crate::domain::user::value_objects::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a user and its nested articles in a single transaction. Each
    /// article is linked to the freshly created user regardless of any
    /// `user_id` carried in the payload.
    async fn insert_with_articles(
        &self,
        user: NewUser,
        articles: Vec<NewArticle>,
    ) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    /// The user plus its articles and profile in one result.
    async fn find_with_relations(&self, id: UserId) -> DomainResult<Option<UserWithRelations>>;
}
