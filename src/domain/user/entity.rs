// src/domain/user/entity.rs
use crate::domain::article::Article;
use crate::domain::user::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
}

#[derive(Debug, Clone)]
pub struct Profile {
    pub id: i64,
    pub user_id: UserId,
    pub name: String,
    pub address: String,
    pub phone: String,
    // A combined "full address" (name + address + phone) may become a
    // derived field here once something renders it.
}

/// A user together with its owned articles and optional profile, as served
/// by the relation-include read path.
#[derive(Debug, Clone)]
pub struct UserWithRelations {
    pub user: User,
    pub articles: Vec<Article>,
    pub profile: Option<Profile>,
}
