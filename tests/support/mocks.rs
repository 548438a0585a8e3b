// tests/support/mocks.rs
use async_trait::async_trait;
use std::sync::Mutex;

use gazette::domain::article::{
    Article, ArticleId, ArticlePatch, ArticleReadRepository, ArticleWriteRepository, NewArticle,
};
use gazette::domain::errors::{DomainError, DomainResult};
use gazette::domain::user::{
    NewUser, Profile, User, UserId, UserRepository, UserWithRelations,
};

/// In-memory stand-in for the Postgres repositories. One store implements
/// all three repository traits so a single `Arc` can be handed to every
/// service and inspected by the test afterwards.
#[derive(Default)]
pub struct InMemoryStore {
    pub articles: Mutex<Vec<Article>>,
    pub users: Mutex<Vec<User>>,
    pub profiles: Mutex<Vec<Profile>>,
}

impl InMemoryStore {
    pub fn article_count(&self) -> usize {
        self.articles.lock().unwrap().len()
    }

    pub fn add_profile(&self, user_id: i64, name: &str, address: &str, phone: &str) {
        let mut profiles = self.profiles.lock().unwrap();
        let id = profiles.len() as i64 + 1;
        profiles.push(Profile {
            id,
            user_id: UserId::new(user_id).unwrap(),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        });
    }

    fn next_article_id(articles: &[Article]) -> i64 {
        articles
            .iter()
            .map(|a| i64::from(a.id))
            .max()
            .unwrap_or(0)
            + 1
    }

    fn push_article(&self, article: NewArticle) -> Article {
        let mut articles = self.articles.lock().unwrap();
        let id = Self::next_article_id(&articles);
        let stored = Article {
            id: ArticleId::new(id).unwrap(),
            title: article.title,
            content: article.content,
            state: article.state,
            user_id: article.user_id,
        };
        articles.push(stored.clone());
        stored
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        Ok(self.push_article(article))
    }

    async fn insert_many(&self, articles: Vec<NewArticle>) -> DomainResult<u64> {
        let count = articles.len() as u64;
        for article in articles {
            self.push_article(article);
        }
        Ok(count)
    }

    async fn update_many(&self, ids: &[ArticleId], patch: ArticlePatch) -> DomainResult<u64> {
        let mut articles = self.articles.lock().unwrap();
        let mut count = 0;
        for article in articles.iter_mut() {
            if !ids.contains(&article.id) {
                continue;
            }
            if let Some(title) = &patch.title {
                article.title = title.clone();
            }
            if let Some(content) = &patch.content {
                article.content = content.clone();
            }
            if let Some(state) = &patch.state {
                article.state = state.clone();
            }
            count += 1;
        }
        Ok(count)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let position = articles.iter().position(|a| a.id == id).ok_or_else(|| {
            DomainError::NotFound(format!("article {} not found", i64::from(id)))
        })?;
        Ok(articles.remove(position))
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Article>> {
        Ok(self.articles.lock().unwrap().clone())
    }

    async fn list_page(&self, skip: u32, take: u32) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .skip(skip as usize)
            .take(take as usize)
            .cloned()
            .collect())
    }

    async fn list_by_state(&self, state: &str) -> DomainResult<Vec<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.state == state)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self
            .articles
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned())
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert_with_articles(
        &self,
        user: NewUser,
        articles: Vec<NewArticle>,
    ) -> DomainResult<User> {
        let created = {
            let mut users = self.users.lock().unwrap();
            if users.iter().any(|u| u.email == user.email) {
                return Err(DomainError::Conflict("email already exists".into()));
            }
            let id = users.iter().map(|u| i64::from(u.id)).max().unwrap_or(0) + 1;
            let created = User {
                id: UserId::new(id).unwrap(),
                email: user.email,
            };
            users.push(created.clone());
            created
        };

        for mut article in articles {
            article.user_id = Some(created.id);
            self.push_article(article);
        }

        Ok(created)
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_with_relations(&self, id: UserId) -> DomainResult<Option<UserWithRelations>> {
        let Some(user) = UserRepository::find_by_id(self, id).await? else {
            return Ok(None);
        };

        let articles = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| a.user_id == Some(id))
            .cloned()
            .collect();

        let profile = self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == id)
            .cloned();

        Ok(Some(UserWithRelations {
            user,
            articles,
            profile,
        }))
    }
}
