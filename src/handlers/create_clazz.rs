//! Command: create a class under the next generated id.

use std::sync::Arc;

use tracing::{info, warn};

use super::id_sequence::IdSequence;
use crate::bus::{Command, CommandHandler};
use crate::clazz::{normalize_name, Clazz, ClazzView};
use crate::error::ClazzError;
use crate::repository::ClazzRepository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateClazz {
    /// `None` stands for a missing name and is rejected.
    pub name: Option<String>,
}

impl CreateClazz {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }
}

impl Command for CreateClazz {
    type Output = ClazzView;
}

pub struct CreateClazzHandler<R> {
    repo: Arc<R>,
    ids: IdSequence,
}

impl<R: ClazzRepository + 'static> CreateClazzHandler<R> {
    pub fn new(repo: Arc<R>, ids: IdSequence) -> Self {
        Self { repo, ids }
    }
}

impl<R: ClazzRepository + 'static> CommandHandler for CreateClazzHandler<R> {
    type Command = CreateClazz;

    fn handle(&self, command: CreateClazz) -> Result<ClazzView, ClazzError> {
        let raw = command
            .name
            .ok_or_else(|| ClazzError::invalid("name must not be null"))?;
        let name = normalize_name(&raw)?;

        if self.repo.exists_by_name(&name)? {
            warn!(name = %name, "rejected duplicate class name");
            return Err(ClazzError::duplicate(
                Clazz::ENTITY,
                format!("name '{}'", name),
            ));
        }

        let clazz = Clazz::new(self.ids.next()?, &name)?;
        let saved = self.repo.insert_unique(clazz).inspect_err(|_| {
            warn!(name = %name, "lost class name race to a concurrent create");
        })?;

        info!(id = saved.id(), name = saved.name(), "created class");
        Ok(ClazzView::from(saved))
    }
}
