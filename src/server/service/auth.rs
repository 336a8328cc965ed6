//! Account registration and credential checks.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{CreateUserParam, User},
    util::password::{hash_password, verify_password},
};

/// Longest accepted username, matching the column length.
pub const MAX_USERNAME_LENGTH: usize = 255;
/// Shortest accepted password.
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// The username is trimmed before validation and storage; the password is stored
    /// as an Argon2 hash.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Username empty or too long, or password too short
    /// - `Err(AuthError::UsernameTaken)` - Username already registered
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(AppError::BadRequest("Username cannot be empty".to_string()));
        }
        if username.chars().count() > MAX_USERNAME_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Username cannot be longer than {} characters",
                MAX_USERNAME_LENGTH
            )));
        }
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }

        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_username(username).await?.is_some() {
            return Err(AuthError::UsernameTaken(username.to_string()).into());
        }

        let password_hash = hash_password(password)?;

        let result = user_repo
            .create(CreateUserParam {
                username: username.to_string(),
                password_hash,
            })
            .await;

        match result {
            Ok(user) => {
                tracing::info!("Registered user {} ({})", user.username, user.id);
                Ok(user)
            }
            // Lost a race with a concurrent registration for the same name
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthError::UsernameTaken(username.to_string()).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Checks a username and password pair.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AuthError::InvalidCredentials)` - Unknown username or wrong password
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, AppError> {
        let username = username.trim();

        let Some(user) = UserRepository::new(self.db)
            .find_by_username(username)
            .await?
        else {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials(username.to_string()).into());
        }

        Ok(user)
    }
}
