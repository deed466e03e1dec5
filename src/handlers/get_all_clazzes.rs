use std::sync::Arc;

use crate::bus::{Query, QueryHandler};
use crate::clazz::ClazzView;
use crate::error::ClazzError;
use crate::repository::ClazzRepository;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GetAllClazzes;

impl Query for GetAllClazzes {
    type Output = Vec<ClazzView>;
}

/// Lists every stored class in repository iteration order.
pub struct GetAllClazzesHandler<R> {
    repo: Arc<R>,
}

impl<R: ClazzRepository + 'static> GetAllClazzesHandler<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

impl<R: ClazzRepository + 'static> QueryHandler for GetAllClazzesHandler<R> {
    type Query = GetAllClazzes;

    fn handle(&self, _query: GetAllClazzes) -> Result<Vec<ClazzView>, ClazzError> {
        Ok(self.repo.find_all()?.iter().map(ClazzView::from).collect())
    }
}
