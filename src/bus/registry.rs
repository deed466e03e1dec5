//! Type-keyed handler table shared by both dispatchers.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

use tracing::{debug_span, error};

use crate::error::ClazzError;

type Handle<Req, Out> = Box<dyn Fn(Req) -> Result<Out, ClazzError> + Send + Sync>;

/// A registered handler with its request type erased.
///
/// `handle` always holds a `Handle<Req, Out>` for the request type the
/// entry is keyed under.
struct Entry {
    request_type: &'static str,
    handle: Box<dyn Any + Send + Sync>,
}

pub(crate) struct HandlerRegistry {
    kind: &'static str,
    handlers: HashMap<TypeId, Entry>,
}

impl HandlerRegistry {
    pub(crate) fn new(kind: &'static str) -> Self {
        Self {
            kind,
            handlers: HashMap::new(),
        }
    }

    /// Record `handle` as the handler for `Req`. Fails if `Req` already has one.
    pub(crate) fn insert<Req, Out, F>(&mut self, handle: F) -> Result<(), ClazzError>
    where
        Req: Send + 'static,
        Out: Send + 'static,
        F: Fn(Req) -> Result<Out, ClazzError> + Send + Sync + 'static,
    {
        let request_type = type_name::<Req>();
        if self.handlers.contains_key(&TypeId::of::<Req>()) {
            return Err(ClazzError::HandlerConflict {
                kind: self.kind,
                request_type,
            });
        }

        let handle: Handle<Req, Out> = Box::new(handle);
        self.handlers.insert(
            TypeId::of::<Req>(),
            Entry {
                request_type,
                handle: Box::new(handle),
            },
        );
        Ok(())
    }

    /// Route `request` to the handler registered for its type.
    pub(crate) fn dispatch<Req, Out>(&self, request: Req) -> Result<Out, ClazzError>
    where
        Req: Send + 'static,
        Out: Send + 'static,
    {
        let request_type = type_name::<Req>();
        let _span = debug_span!("dispatch", kind = self.kind, request_type).entered();

        let handle = self
            .handlers
            .get(&TypeId::of::<Req>())
            .and_then(|entry| entry.handle.downcast_ref::<Handle<Req, Out>>());

        match handle {
            Some(handle) => handle(request),
            None => {
                error!(
                    kind = self.kind,
                    request_type, "no handler registered for request type"
                );
                Err(ClazzError::HandlerNotFound {
                    kind: self.kind,
                    request_type,
                })
            }
        }
    }

    pub(crate) fn contains<Req: 'static>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<Req>())
    }

    /// Registered request type names, sorted.
    pub(crate) fn request_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> =
            self.handlers.values().map(|entry| entry.request_type).collect();
        names.sort_unstable();
        names
    }
}
