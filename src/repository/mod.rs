mod error;
mod in_memory;
mod repository;

pub use error::RepositoryError;
pub use in_memory::InMemoryClazzRepository;
pub use repository::{ClazzRepository, ExistsByName, FindAll, FindById, Save};
