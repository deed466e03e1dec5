//! bus: typed command/query dispatch.
//!
//! Requests are plain structs implementing [`Command`] or [`Query`]. Each
//! handler implements [`CommandHandler`] or [`QueryHandler`] for exactly one
//! request type, and is listed explicitly when a dispatcher is built:
//!
//! ```ignore
//! let commands = register_handlers!(
//!     CommandDispatcher::builder(),
//!     CreateClazzHandler::new(repo.clone(), ids),
//!     RegisterUserHandler::new(users.clone()),
//! )
//! .build()?;
//!
//! let view = commands.dispatch(CreateClazz::new("Biology"))?;
//! ```
//!
//! Dispatch performs no validation and no transformation: the handler's
//! `Ok` or `Err` reaches the caller as-is.

mod command_dispatcher;
mod query_dispatcher;
mod registry;
mod request;

pub use command_dispatcher::{CommandDispatcher, CommandDispatcherBuilder};
pub use query_dispatcher::{QueryDispatcher, QueryDispatcherBuilder};
pub use request::{Command, CommandHandler, Query, QueryHandler};

/// Register several handler instances on a dispatcher builder.
///
/// # Example
/// ```ignore
/// let queries = clazz_cqrs::register_handlers!(
///     QueryDispatcher::builder(),
///     GetClazzByIdHandler::new(repo.clone()),
///     GetAllClazzesHandler::new(repo.clone()),
/// )
/// .build()?;
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($builder:expr, $( $handler:expr ),+ $(,)?) => {
        $builder
        $(
            .handler($handler)
        )+
    };
}
