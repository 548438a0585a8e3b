// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::{ArticleId, ArticlePatch},
};

pub struct UpdateArticlesCommand {
    pub ids: Vec<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub state: Option<String>,
}

impl ArticleCommandService {
    /// Apply one partial payload to every article in the id set. Returns
    /// the affected row count, not the updated records.
    pub async fn update_articles(&self, command: UpdateArticlesCommand) -> ApplicationResult<u64> {
        if command.ids.is_empty() {
            return Err(ApplicationError::validation("no article ids given"));
        }

        let ids = command
            .ids
            .into_iter()
            .map(ArticleId::new)
            .collect::<Result<Vec<_>, _>>()?;

        let patch = ArticlePatch {
            title: command.title,
            content: command.content,
            state: command.state,
        };
        if patch.is_empty() {
            return Err(ApplicationError::validation(
                "update payload has no recognised fields",
            ));
        }

        let count = self.write_repo.update_many(&ids, patch).await?;
        Ok(count)
    }
}
