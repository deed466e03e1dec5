mod app;
mod config;
mod error;

pub mod bus;
pub mod clazz;
pub mod handlers;
pub mod repository;
pub mod user;

#[cfg(feature = "http")]
pub mod http;

pub use app::App;
pub use bus::{
    Command, CommandDispatcher, CommandDispatcherBuilder, CommandHandler, Query,
    QueryDispatcher, QueryDispatcherBuilder, QueryHandler,
};
pub use clazz::{Clazz, ClazzView};
pub use config::AppConfig;
pub use error::ClazzError;
pub use handlers::{
    CreateClazz, CreateClazzHandler, GetAllClazzes, GetAllClazzesHandler, GetClazzById,
    GetClazzByIdHandler, IdSequence,
};
pub use repository::{
    ClazzRepository, ExistsByName, FindAll, FindById, InMemoryClazzRepository, RepositoryError,
    Save,
};
pub use user::{
    Email, InMemoryUserRepository, RegisterUser, RegisterUserHandler, RegisteredUser, User,
    UserRepository,
};
