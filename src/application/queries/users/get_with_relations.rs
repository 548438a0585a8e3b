// src/application/queries/users/get_with_relations.rs
use super::UserQueryService;
use crate::{
    application::{dto::UserWithArticlesDto, error::ApplicationResult},
    domain::user::UserId,
};

pub struct GetUserWithArticlesQuery {
    pub id: i64,
}

impl UserQueryService {
    /// One user with its articles and profile included, or `None` when the
    /// id matches nothing (served as JSON null with 200).
    pub async fn get_user_with_articles(
        &self,
        query: GetUserWithArticlesQuery,
    ) -> ApplicationResult<Option<UserWithArticlesDto>> {
        let id = UserId::new(query.id)?;
        let user = self.user_repo.find_with_relations(id).await?;
        Ok(user.map(Into::into))
    }
}
