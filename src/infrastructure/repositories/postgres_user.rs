// src/infrastructure/repositories/postgres_user.rs
use super::map_sqlx;
use crate::domain::article::{Article, NewArticle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{NewUser, Profile, User, UserId, UserRepository, UserWithRelations};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    email: String,
}

impl TryFrom<UserRow> for User {
    type Error = DomainError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: UserId::new(row.id)?,
            email: row.email,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    user_id: i64,
    name: String,
    address: String,
    phone: String,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        Ok(Profile {
            id: row.id,
            user_id: UserId::new(row.user_id)?,
            name: row.name,
            address: row.address,
            phone: row.phone,
        })
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert_with_articles(
        &self,
        user: NewUser,
        articles: Vec<NewArticle>,
    ) -> DomainResult<User> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, UserRow>(
            "INSERT INTO users (email) VALUES ($1) RETURNING id, email",
        )
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for article in &articles {
            sqlx::query(
                "INSERT INTO articles (title, content, state, user_id) VALUES ($1, $2, $3, $4)",
            )
            .bind(&article.title)
            .bind(&article.content)
            .bind(&article.state)
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;

        User::try_from(row)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>("SELECT id, email FROM users WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(User::try_from).transpose()
    }

    async fn find_with_relations(&self, id: UserId) -> DomainResult<Option<UserWithRelations>> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let article_rows = sqlx::query_as::<_, super::postgres_article::ArticleRow>(
            "SELECT id, title, content, state, user_id FROM articles WHERE user_id = $1 ORDER BY id",
        )
        .bind(i64::from(id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let articles = article_rows
            .into_iter()
            .map(Article::try_from)
            .collect::<DomainResult<Vec<_>>>()?;

        let profile_row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, user_id, name, address, phone FROM profiles WHERE user_id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let profile = profile_row.map(Profile::try_from).transpose()?;

        Ok(Some(UserWithRelations {
            user,
            articles,
            profile,
        }))
    }
}
