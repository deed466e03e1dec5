//! Request and handler contracts.
//!
//! A request type declares its result through `Output`; a handler declares
//! the one request type it accepts through its associated type. Dispatchers
//! key on that request type, so registering a handler needs no name or tag.

use crate::error::ClazzError;

/// A request describing an intended state change.
pub trait Command: Send + 'static {
    type Output: Send + 'static;
}

/// A request describing a read.
pub trait Query: Send + 'static {
    type Output: Send + 'static;
}

/// Performs the use case behind exactly one command type.
pub trait CommandHandler: Send + Sync + 'static {
    type Command: Command;

    fn handle(
        &self,
        command: Self::Command,
    ) -> Result<<Self::Command as Command>::Output, ClazzError>;
}

/// Performs the use case behind exactly one query type.
pub trait QueryHandler: Send + Sync + 'static {
    type Query: Query;

    fn handle(&self, query: Self::Query) -> Result<<Self::Query as Query>::Output, ClazzError>;
}
