use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::{message::MessageRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::User,
};

/// Checks performed by [`AuthGuard::require`] after the user is resolved.
pub enum Permission {
    /// The user must be the author of the message with this ID.
    ///
    /// Fails with `AppError::NotFound` if the message does not exist.
    MessageAuthor(i32),
}

/// Resolves the logged-in user from the session and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if every permission holds.
    ///
    /// Pass an empty slice to only require authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user meeting all permissions
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session references a deleted user
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    /// - `Err(AppError::NotFound)` - A permission referenced a missing message
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            match permission {
                Permission::MessageAuthor(message_id) => {
                    let author_id = MessageRepository::new(self.db)
                        .get_author_id(*message_id)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

                    if author_id != user.id {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            format!("User is not the author of message {}", message_id),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
