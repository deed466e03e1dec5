//! Classroom use cases: one request type and one handler per file.

mod create_clazz;
mod get_all_clazzes;
mod get_clazz_by_id;
mod id_sequence;

pub use create_clazz::{CreateClazz, CreateClazzHandler};
pub use get_all_clazzes::{GetAllClazzes, GetAllClazzesHandler};
pub use get_clazz_by_id::{GetClazzById, GetClazzByIdHandler};
pub use id_sequence::IdSequence;
