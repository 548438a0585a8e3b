use crate::application::dto::ArticleDto;
use crate::domain::user::{Profile, User, UserWithRelations};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDto {
    pub id: i64,
    pub email: String,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDto {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id.into(),
            name: profile.name,
            address: profile.address,
            phone: profile.phone,
        }
    }
}

/// The relation-include read shape: the user record flattened together with
/// its articles and optional profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserWithArticlesDto {
    pub id: i64,
    pub email: String,
    pub articles: Vec<ArticleDto>,
    pub profile: Option<ProfileDto>,
}

impl From<UserWithRelations> for UserWithArticlesDto {
    fn from(value: UserWithRelations) -> Self {
        Self {
            id: value.user.id.into(),
            email: value.user.email,
            articles: value.articles.into_iter().map(Into::into).collect(),
            profile: value.profile.map(Into::into),
        }
    }
}
