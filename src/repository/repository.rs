use super::error::RepositoryError;
use crate::clazz::Clazz;
use crate::error::ClazzError;

/// Snapshot of every stored class, in iteration order.
pub trait FindAll {
    fn find_all(&self) -> Result<Vec<Clazz>, RepositoryError>;
}

/// First stored class with the given id.
pub trait FindById {
    fn find_by_id(&self, id: u32) -> Result<Option<Clazz>, RepositoryError>;
}

/// Case-insensitive name lookup.
pub trait ExistsByName {
    fn exists_by_name(&self, name: &str) -> Result<bool, RepositoryError>;
}

/// Upsert by id.
pub trait Save {
    /// Remove any entry sharing `clazz`'s id, then append `clazz`.
    fn save(&self, clazz: Clazz) -> Result<Clazz, RepositoryError>;

    /// Like [`Save::save`], but fails with `DuplicateEntity` when another
    /// entry already holds the same name. Check and append happen under a
    /// single write.
    fn insert_unique(&self, clazz: Clazz) -> Result<Clazz, ClazzError>;
}

/// Full classroom repository combining all capabilities.
pub trait ClazzRepository: FindAll + FindById + ExistsByName + Save + Send + Sync {}

// Blanket implementation: anything implementing all traits is a ClazzRepository
impl<T> ClazzRepository for T where T: FindAll + FindById + ExistsByName + Save + Send + Sync {}
