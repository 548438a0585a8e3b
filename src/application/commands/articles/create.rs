// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
        validation::{self, ArticleDraft},
    },
    domain::{article::NewArticle, user::UserId},
};

/// Raw article fields as they arrive on the unvalidated write paths. The
/// state string is taken as-is; no schema applies here.
#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: String,
    pub content: String,
    pub state: String,
    pub user_id: Option<i64>,
}

impl ArticleFields {
    pub(crate) fn into_new_article(self) -> ApplicationResult<NewArticle> {
        let user_id = self.user_id.map(UserId::new).transpose()?;
        Ok(NewArticle {
            title: self.title,
            content: self.content,
            state: self.state,
            user_id,
        })
    }
}

pub struct CreateArticlesCommand {
    pub articles: Vec<ArticleFields>,
}

pub struct CreateUserArticleCommand {
    pub user_id: i64,
    pub draft: ArticleDraft,
}

impl ArticleCommandService {
    /// Bulk insert. Acknowledges with the row count; created records are
    /// not echoed back.
    pub async fn create_articles(&self, command: CreateArticlesCommand) -> ApplicationResult<u64> {
        let articles = command
            .articles
            .into_iter()
            .map(ArticleFields::into_new_article)
            .collect::<ApplicationResult<Vec<_>>>()?;

        let count = self.write_repo.insert_many(articles).await?;
        tracing::debug!(count, "bulk created articles");
        Ok(count)
    }

    /// The one validated write path: create an article owned by an existing
    /// user, rejecting payloads that break the article schema.
    pub async fn create_user_article(
        &self,
        command: CreateUserArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let user_id = UserId::new(command.user_id)?;
        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| {
                ApplicationError::not_found(format!("user {} not found", command.user_id))
            })?;

        validation::validate_draft(&command.draft)?;

        let created = self
            .write_repo
            .insert(NewArticle {
                title: command.draft.title,
                content: command.draft.content,
                state: command.draft.state,
                user_id: Some(user.id),
            })
            .await?;

        Ok(created.into())
    }
}
