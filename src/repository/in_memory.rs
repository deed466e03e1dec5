//! InMemoryClazzRepository - Vec-backed classroom store for a single process.

use std::sync::{Arc, RwLock};

use tracing::debug;

use super::error::RepositoryError;
use super::repository::{ExistsByName, FindAll, FindById, Save};
use crate::clazz::Clazz;
use crate::error::ClazzError;

/// Number of example classes written by [`InMemoryClazzRepository::seed`].
pub const SEED_COUNT: u32 = 3;

/// In-memory classroom store backed by an insertion-ordered list.
///
/// Reads take a shared guard and return copies; every mutation is a
/// remove-then-append performed under one exclusive guard, so concurrent
/// writers never interleave. Clone-friendly via Arc.
#[derive(Clone)]
pub struct InMemoryClazzRepository {
    storage: Arc<RwLock<Vec<Clazz>>>,
}

impl Default for InMemoryClazzRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryClazzRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Create a store holding the example classes.
    pub fn seeded() -> Result<Self, ClazzError> {
        let repo = Self::new();
        repo.seed()?;
        Ok(repo)
    }

    /// Write "Class 1".."Class 3" (ids 1..3) when the store is empty.
    ///
    /// Returns the number of entries written.
    pub fn seed(&self) -> Result<usize, ClazzError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("seed"))?;

        if !storage.is_empty() {
            return Ok(0);
        }

        for i in 1..=SEED_COUNT {
            storage.push(Clazz::new(i, &format!("Class {}", i))?);
        }
        debug!(count = storage.len(), "seeded classroom store");
        Ok(storage.len())
    }

    /// Number of stored entries.
    pub fn len(&self) -> Result<usize, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl FindAll for InMemoryClazzRepository {
    fn find_all(&self) -> Result<Vec<Clazz>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.clone())
    }
}

impl FindById for InMemoryClazzRepository {
    fn find_by_id(&self, id: u32) -> Result<Option<Clazz>, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.iter().find(|clazz| clazz.id() == id).cloned())
    }
}

impl ExistsByName for InMemoryClazzRepository {
    fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("read"))?;
        Ok(storage.iter().any(|clazz| clazz.has_name(name)))
    }
}

impl Save for InMemoryClazzRepository {
    fn save(&self, clazz: Clazz) -> Result<Clazz, RepositoryError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;
        upsert(&mut storage, clazz.clone());
        Ok(clazz)
    }

    fn insert_unique(&self, clazz: Clazz) -> Result<Clazz, ClazzError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("write"))?;

        let taken = storage
            .iter()
            .any(|existing| existing.id() != clazz.id() && existing.has_name(clazz.name()));
        if taken {
            return Err(ClazzError::duplicate(
                Clazz::ENTITY,
                format!("name '{}'", clazz.name()),
            ));
        }

        upsert(&mut storage, clazz.clone());
        Ok(clazz)
    }
}

fn upsert(storage: &mut Vec<Clazz>, clazz: Clazz) {
    storage.retain(|existing| existing.id() != clazz.id());
    storage.push(clazz);
}
