//! User registration, dispatched through the same command bus as the
//! classroom use cases.

mod email;
mod register;
mod repository;
mod user;

pub use email::Email;
pub use register::{RegisterUser, RegisterUserHandler, RegisteredUser, RESERVED_NAMES};
pub use repository::{InMemoryUserRepository, UserRepository};
pub use user::User;
