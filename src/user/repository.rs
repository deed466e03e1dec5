//! User storage: trait plus a HashMap-backed in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::email::Email;
use super::user::User;
use crate::repository::RepositoryError;

pub trait UserRepository: Send + Sync {
    fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;
    fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;
    fn save(&self, user: User) -> Result<User, RepositoryError>;
}

#[derive(Default)]
struct Tables {
    users_by_id: HashMap<Uuid, User>,
    ids_by_email: HashMap<String, Uuid>,
}

/// Both indexes sit behind one lock so they never disagree.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(tables
            .ids_by_email
            .get(email.as_str())
            .and_then(|id| tables.users_by_id.get(id))
            .cloned())
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned("user read"))?;
        Ok(tables.users_by_id.get(&id).cloned())
    }

    fn save(&self, user: User) -> Result<User, RepositoryError> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("user write"))?;
        tables
            .ids_by_email
            .insert(user.email().as_str().to_string(), user.id());
        tables.users_by_id.insert(user.id(), user.clone());
        Ok(user)
    }
}
