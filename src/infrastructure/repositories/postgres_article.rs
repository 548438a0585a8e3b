// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, content, state, user_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
pub(super) struct ArticleRow {
    id: i64,
    title: String,
    content: String,
    state: String,
    user_id: Option<i64>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: row.title,
            content: row.content,
            state: row.state,
            user_id: row.user_id.map(UserId::new).transpose()?,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, content, state, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id, title, content, state, user_id",
        )
        .bind(&article.title)
        .bind(&article.content)
        .bind(&article.state)
        .bind(article.user_id.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn insert_many(&self, articles: Vec<NewArticle>) -> DomainResult<u64> {
        if articles.is_empty() {
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO articles (title, content, state, user_id) ");
        builder.push_values(articles, |mut row, article| {
            row.push_bind(article.title)
                .push_bind(article.content)
                .push_bind(article.state)
                .push_bind(article.user_id.map(i64::from));
        });

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn update_many(&self, ids: &[ArticleId], patch: ArticlePatch) -> DomainResult<u64> {
        if ids.is_empty() {
            return Ok(0);
        }
        if patch.is_empty() {
            return Err(DomainError::Validation("empty article patch".into()));
        }

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("UPDATE articles SET ");
        let mut first = true;

        if let Some(title) = patch.title {
            builder.push("title = ");
            builder.push_bind(title);
            first = false;
        }
        if let Some(content) = patch.content {
            if !first {
                builder.push(", ");
            }
            builder.push("content = ");
            builder.push_bind(content);
            first = false;
        }
        if let Some(state) = patch.state {
            if !first {
                builder.push(", ");
            }
            builder.push("state = ");
            builder.push_bind(state);
        }

        builder.push(" WHERE id IN (");
        {
            let mut separated = builder.separated(", ");
            for id in ids {
                separated.push_bind(i64::from(*id));
            }
        }
        builder.push(")");

        let result = builder
            .build()
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "DELETE FROM articles WHERE id = $1
             RETURNING id, title, content, state, user_id",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let row = row.ok_or_else(|| {
            DomainError::NotFound(format!("article {} not found", i64::from(id)))
        })?;

        Article::try_from(row)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_page(&self, skip: u32, take: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles ORDER BY id OFFSET $1 LIMIT $2"
        ))
        .bind(i64::from(skip))
        .bind(i64::from(take))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_by_state(&self, state: &str) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE state = $1 ORDER BY id"
        ))
        .bind(state)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }
}
