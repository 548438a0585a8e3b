// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{articles::ArticleCommandService, users::UserCommandService},
        queries::{articles::ArticleQueryService, users::UserQueryService},
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        user::UserRepository,
    },
};

/// The full set of command and query services, wired once at startup from
/// explicitly injected repositories and shared behind one `Arc`.
pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_write_repo),
            Arc::clone(&user_repo),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(Arc::clone(&article_read_repo)));
        let user_commands = Arc::new(UserCommandService::new(Arc::clone(&user_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            article_queries,
            user_commands,
            user_queries,
        }
    }
}
