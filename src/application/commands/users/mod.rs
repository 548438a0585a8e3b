mod create;
mod service;

pub use create::CreateUserCommand;
pub use service::UserCommandService;
