mod get_with_relations;
mod service;

pub use get_with_relations::GetUserWithArticlesQuery;
pub use service::UserQueryService;
