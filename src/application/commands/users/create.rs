// src/application/commands/users/create.rs
use super::UserCommandService;
use crate::{
    application::{commands::articles::ArticleFields, error::ApplicationResult},
    domain::{article::NewArticle, user::NewUser},
};

pub struct CreateUserCommand {
    pub email: String,
    pub articles: Vec<ArticleFields>,
}

impl UserCommandService {
    /// Create a user and its embedded articles in one relational write.
    /// Article payloads are unvalidated on this path; linkage to the new
    /// user is handled by the repository.
    pub async fn create_user(&self, command: CreateUserCommand) -> ApplicationResult<()> {
        let articles = command
            .articles
            .into_iter()
            .map(|fields| NewArticle {
                title: fields.title,
                content: fields.content,
                state: fields.state,
                user_id: None,
            })
            .collect();

        let user = self
            .user_repo
            .insert_with_articles(NewUser { email: command.email }, articles)
            .await?;
        tracing::debug!(user_id = i64::from(user.id), "created user with nested articles");
        Ok(())
    }
}
