use std::sync::Arc;

use crate::bus::{Query, QueryHandler};
use crate::clazz::{Clazz, ClazzView};
use crate::error::ClazzError;
use crate::repository::ClazzRepository;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetClazzById {
    pub id: u32,
}

impl GetClazzById {
    pub fn new(id: u32) -> Self {
        Self { id }
    }
}

impl Query for GetClazzById {
    type Output = ClazzView;
}

pub struct GetClazzByIdHandler<R> {
    repo: Arc<R>,
}

impl<R: ClazzRepository + 'static> GetClazzByIdHandler<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: ClazzRepository + 'static> QueryHandler for GetClazzByIdHandler<R> {
    type Query = GetClazzById;

    fn handle(&self, query: GetClazzById) -> Result<ClazzView, ClazzError> {
        self.repo
            .find_by_id(query.id)?
            .map(ClazzView::from)
            .ok_or_else(|| ClazzError::not_found(Clazz::ENTITY, query.id))
    }
}
