//! CommandDispatcher - routes state-changing requests to their handlers.

use super::registry::HandlerRegistry;
use super::request::{Command, CommandHandler};
use crate::error::ClazzError;

/// Lookup table from command type to its handler, built once at startup.
///
/// ## Example
///
/// ```ignore
/// let commands = CommandDispatcher::builder()
///     .handler(CreateClazzHandler::new(repo.clone(), ids))
///     .build()?;
///
/// let created = commands.dispatch(CreateClazz::new("Biology"))?;
/// ```
pub struct CommandDispatcher {
    registry: HandlerRegistry,
}

impl CommandDispatcher {
    pub fn builder() -> CommandDispatcherBuilder {
        CommandDispatcherBuilder {
            registry: HandlerRegistry::new("command"),
            conflict: None,
        }
    }

    /// Invoke the handler registered for `C` and return its result unchanged.
    ///
    /// Fails with `HandlerNotFound` when nothing is registered for `C`.
    pub fn dispatch<C: Command>(&self, command: C) -> Result<C::Output, ClazzError> {
        self.registry.dispatch::<C, C::Output>(command)
    }

    /// Whether a handler is registered for `C`.
    pub fn handles<C: Command>(&self) -> bool {
        self.registry.contains::<C>()
    }

    /// Registered command type names.
    pub fn commands(&self) -> Vec<&'static str> {
        self.registry.request_types()
    }
}

/// Collects command handlers. The first duplicate registration is kept and
/// reported by [`CommandDispatcherBuilder::build`].
pub struct CommandDispatcherBuilder {
    registry: HandlerRegistry,
    conflict: Option<ClazzError>,
}

impl CommandDispatcherBuilder {
    /// Register a handler for the command type it declares.
    pub fn handler<H: CommandHandler>(self, handler: H) -> Self {
        self.handler_fn(move |command: H::Command| handler.handle(command))
    }

    /// Register a closure as the handler for `C`.
    pub fn handler_fn<C, F>(mut self, handle: F) -> Self
    where
        C: Command,
        F: Fn(C) -> Result<C::Output, ClazzError> + Send + Sync + 'static,
    {
        if let Err(err) = self.registry.insert::<C, C::Output, F>(handle) {
            self.conflict.get_or_insert(err);
        }
        self
    }

    pub fn build(self) -> Result<CommandDispatcher, ClazzError> {
        match self.conflict {
            Some(err) => Err(err),
            None => Ok(CommandDispatcher {
                registry: self.registry,
            }),
        }
    }
}
