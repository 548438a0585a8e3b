pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, Profile, User, UserWithRelations};
pub use repository::UserRepository;
pub use value_objects::UserId;
