//! Command: register a user.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use super::email::Email;
use super::repository::UserRepository;
use super::user::User;
use crate::bus::{Command, CommandHandler};
use crate::error::ClazzError;

/// Names no user may register under, compared case-insensitively.
pub const RESERVED_NAMES: &[&str] = &["admin"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
}

impl RegisterUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl Command for RegisterUser {
    type Output = RegisteredUser;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub registered_at: DateTime<Utc>,
}

pub struct RegisterUserHandler<U> {
    users: Arc<U>,
}

impl<U: UserRepository + 'static> RegisterUserHandler<U> {
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

impl<U: UserRepository + 'static> CommandHandler for RegisterUserHandler<U> {
    type Command = RegisterUser;

    fn handle(&self, command: RegisterUser) -> Result<RegisteredUser, ClazzError> {
        let email = Email::parse(&command.email)?;
        let candidate = User::new(None, &command.name, email)?;

        if let Some(existing) = self.users.find_by_email(candidate.email())? {
            warn!(email = %existing.email(), "rejected duplicate registration");
            return Err(ClazzError::duplicate(
                User::ENTITY,
                format!("email {}", existing.email()),
            ));
        }
        ensure_not_reserved(candidate.name())?;

        let saved = self.users.save(candidate)?;
        let registered_at = Utc::now();
        info!(id = %saved.id(), email = %saved.email(), "registered user");

        Ok(RegisteredUser {
            id: saved.id(),
            name: saved.name().to_string(),
            email: saved.email().clone(),
            registered_at,
        })
    }
}

fn ensure_not_reserved(name: &str) -> Result<(), ClazzError> {
    let lowered = name.to_lowercase();
    if RESERVED_NAMES.iter().any(|reserved| *reserved == lowered) {
        return Err(ClazzError::invalid("reserved names cannot be used"));
    }
    Ok(())
}
