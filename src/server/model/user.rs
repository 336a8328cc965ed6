//! User domain models and parameters.
//!
//! Provides the domain model for registered accounts and the parameter type used
//! when inserting a new account.

use chrono::{DateTime, Utc};

use crate::model::user::UserDto;

/// Registered account able to post messages and vote.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Primary key of the user.
    pub id: i32,
    /// Unique login name.
    pub username: String,
    /// Argon2 PHC string of the user's password.
    pub password_hash: String,
    /// When the account was registered.
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    ///
    /// The password hash never leaves the server.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            password_hash: entity.password_hash,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for inserting a new user.
///
/// The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Unique login name, already trimmed and validated.
    pub username: String,
    /// Argon2 PHC string of the password.
    pub password_hash: String,
}
