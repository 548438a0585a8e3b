mod create;
mod delete;
mod service;
mod update;

pub use create::{ArticleFields, CreateArticlesCommand, CreateUserArticleCommand};
pub use delete::DeleteArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticlesCommand;
