mod articles;
mod users;

pub use articles::{ArticleDto, SuccessDto, UpdateCountDto};
pub use users::{ProfileDto, UserDto, UserWithArticlesDto};
