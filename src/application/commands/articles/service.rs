// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::domain::{article::ArticleWriteRepository, user::UserRepository};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        user_repo: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            write_repo,
            user_repo,
        }
    }
}
