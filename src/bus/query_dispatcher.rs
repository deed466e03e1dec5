//! QueryDispatcher - routes read-only requests to their handlers.
//!
//! Shaped like [`CommandDispatcher`](super::CommandDispatcher) but kept as a
//! separate table so reads and writes never share a registration.

use super::registry::HandlerRegistry;
use super::request::{Query, QueryHandler};
use crate::error::ClazzError;

/// Lookup table from query type to its handler, built once at startup.
pub struct QueryDispatcher {
    registry: HandlerRegistry,
}

impl QueryDispatcher {
    pub fn builder() -> QueryDispatcherBuilder {
        QueryDispatcherBuilder {
            registry: HandlerRegistry::new("query"),
            conflict: None,
        }
    }

    /// Invoke the handler registered for `Q` and return its result unchanged.
    pub fn dispatch<Q: Query>(&self, query: Q) -> Result<Q::Output, ClazzError> {
        self.registry.dispatch::<Q, Q::Output>(query)
    }

    pub fn handles<Q: Query>(&self) -> bool {
        self.registry.contains::<Q>()
    }

    /// Registered query type names.
    pub fn queries(&self) -> Vec<&'static str> {
        self.registry.request_types()
    }
}

pub struct QueryDispatcherBuilder {
    registry: HandlerRegistry,
    conflict: Option<ClazzError>,
}

impl QueryDispatcherBuilder {
    /// Register a handler for the query type it declares.
    pub fn handler<H: QueryHandler>(self, handler: H) -> Self {
        self.handler_fn(move |query: H::Query| handler.handle(query))
    }

    /// Register a closure as the handler for `Q`.
    pub fn handler_fn<Q, F>(mut self, handle: F) -> Self
    where
        Q: Query,
        F: Fn(Q) -> Result<Q::Output, ClazzError> + Send + Sync + 'static,
    {
        if let Err(err) = self.registry.insert::<Q, Q::Output, F>(handle) {
            self.conflict.get_or_insert(err);
        }
        self
    }

    pub fn build(self) -> Result<QueryDispatcher, ClazzError> {
        match self.conflict {
            Some(err) => Err(err),
            None => Ok(QueryDispatcher {
                registry: self.registry,
            }),
        }
    }
}
