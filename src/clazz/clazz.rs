use std::fmt;

use crate::error::ClazzError;

/// A school class, identified by a numeric id.
///
/// Both fields are fixed at construction. The id is always supplied by the
/// caller; the name is trimmed and must not be blank. Two values are equal
/// when their ids are equal, whatever their names.
#[derive(Debug, Clone)]
pub struct Clazz {
    id: u32,
    name: String,
}

impl Clazz {
    pub const ENTITY: &'static str = "Clazz";

    /// Validating factory.
    pub fn new(id: u32, name: &str) -> Result<Self, ClazzError> {
        Ok(Clazz {
            id,
            name: normalize_name(name)?,
        })
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// A new value sharing this id under a different name.
    pub fn rename(&self, name: &str) -> Result<Self, ClazzError> {
        Clazz::new(self.id, name)
    }

    /// Case-insensitive name comparison used for uniqueness.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Trim a raw name, rejecting empty and all-whitespace input.
pub(crate) fn normalize_name(raw: &str) -> Result<String, ClazzError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClazzError::invalid("name must not be blank"));
    }
    Ok(trimmed.to_string())
}

impl PartialEq for Clazz {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Clazz {}

impl std::hash::Hash for Clazz {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Clazz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Clazz{{id={}, name='{}'}}", self.id, self.name)
    }
}
