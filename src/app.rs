//! Explicit wiring of repositories, handlers and dispatchers.
//!
//! Every handler is listed here by hand; nothing is discovered at runtime.

use std::sync::Arc;

use tracing::info;

use crate::bus::{Command, CommandDispatcher, Query, QueryDispatcher};
use crate::config::AppConfig;
use crate::error::ClazzError;
use crate::handlers::{
    CreateClazzHandler, GetAllClazzesHandler, GetClazzByIdHandler, IdSequence,
};
use crate::register_handlers;
use crate::repository::InMemoryClazzRepository;
use crate::user::{InMemoryUserRepository, RegisterUserHandler};

/// The assembled service: both dispatchers plus the stores behind them.
pub struct App {
    commands: CommandDispatcher,
    queries: QueryDispatcher,
    clazzes: Arc<InMemoryClazzRepository>,
    users: Arc<InMemoryUserRepository>,
}

impl App {
    /// Build with fresh stores, seeding the classroom store when configured.
    pub fn new(config: &AppConfig) -> Result<Self, ClazzError> {
        let clazzes = InMemoryClazzRepository::new();
        if config.seed {
            clazzes.seed()?;
        }
        Self::with_repositories(config, clazzes, InMemoryUserRepository::new())
    }

    /// Build around existing stores. No seeding happens here.
    pub fn with_repositories(
        config: &AppConfig,
        clazzes: InMemoryClazzRepository,
        users: InMemoryUserRepository,
    ) -> Result<Self, ClazzError> {
        let clazzes = Arc::new(clazzes);
        let users = Arc::new(users);
        let ids = IdSequence::above(clazzes.as_ref(), config.id_floor)?;

        let commands = register_handlers!(
            CommandDispatcher::builder(),
            CreateClazzHandler::new(clazzes.clone(), ids),
            RegisterUserHandler::new(users.clone()),
        )
        .build()?;

        let queries = register_handlers!(
            QueryDispatcher::builder(),
            GetClazzByIdHandler::new(clazzes.clone()),
            GetAllClazzesHandler::new(clazzes.clone()),
        )
        .build()?;

        info!(
            commands = commands.commands().len(),
            queries = queries.queries().len(),
            "dispatchers ready"
        );

        Ok(Self {
            commands,
            queries,
            clazzes,
            users,
        })
    }

    pub fn dispatch_command<C: Command>(&self, command: C) -> Result<C::Output, ClazzError> {
        self.commands.dispatch(command)
    }

    pub fn dispatch_query<Q: Query>(&self, query: Q) -> Result<Q::Output, ClazzError> {
        self.queries.dispatch(query)
    }

    pub fn commands(&self) -> &CommandDispatcher {
        &self.commands
    }

    pub fn queries(&self) -> &QueryDispatcher {
        &self.queries
    }

    pub fn clazzes(&self) -> &InMemoryClazzRepository {
        &self.clazzes
    }

    pub fn users(&self) -> &InMemoryUserRepository {
        &self.users
    }
}
