// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: i64,
}

impl ArticleCommandService {
    /// Delete exactly one article and echo it back. A missing id surfaces
    /// as a not-found error rather than a silent success.
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let deleted = self.write_repo.delete(id).await?;
        Ok(deleted.into())
    }
}
