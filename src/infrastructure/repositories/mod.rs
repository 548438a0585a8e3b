// src/infrastructure/repositories/mod.rs
mod postgres_article;
mod postgres_user;

pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_user::PostgresUserRepository;

use crate::domain::errors::DomainError;

const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_ARTICLE_USER: &str = "articles_user_id_fkey";
const CNT_PROFILE_USER: &str = "profiles_user_id_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
                    CNT_PROFILE_USER => DomainError::Conflict("user already has a profile".into()),
                    CNT_ARTICLE_USER => DomainError::NotFound("user not found".into()),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
