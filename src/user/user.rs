use uuid::Uuid;

use super::email::Email;
use crate::error::ClazzError;

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Uuid,
    name: String,
    email: Email,
}

impl User {
    pub const ENTITY: &'static str = "User";

    /// Build a user, generating an id when none is given.
    pub fn new(id: Option<Uuid>, name: &str, email: Email) -> Result<Self, ClazzError> {
        Ok(User {
            id: id.unwrap_or_else(Uuid::new_v4),
            name: validate_name(name)?,
            email,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn change_name(&mut self, name: &str) -> Result<(), ClazzError> {
        self.name = validate_name(name)?;
        Ok(())
    }
}

fn validate_name(raw: &str) -> Result<String, ClazzError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ClazzError::invalid("name cannot be blank"));
    }
    Ok(trimmed.to_string())
}
