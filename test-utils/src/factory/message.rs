//! Message factory for creating test message entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test messages with customizable fields.
///
/// The author must already exist; pass its id to [`MessageFactory::new`].
pub struct MessageFactory<'a> {
    db: &'a DatabaseConnection,
    author_id: i32,
    message: String,
    vote_count: i32,
    created_at: DateTime<Utc>,
}

impl<'a> MessageFactory<'a> {
    /// Creates a new MessageFactory with default values.
    ///
    /// Defaults:
    /// - message: `"Message {id}"`
    /// - vote_count: `0`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, author_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            author_id,
            message: format!("Message {}", id),
            vote_count: 0,
            created_at: Utc::now(),
        }
    }

    /// Sets the message text.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the stored vote count without creating vote rows.
    pub fn vote_count(mut self, vote_count: i32) -> Self {
        self.vote_count = vote_count;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the message entity into the database.
    pub async fn build(self) -> Result<entity::message::Model, DbErr> {
        entity::message::ActiveModel {
            author_id: ActiveValue::Set(self.author_id),
            message: ActiveValue::Set(self.message),
            vote_count: ActiveValue::Set(self.vote_count),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a message with default values for the given author.
pub async fn create_message(
    db: &DatabaseConnection,
    author_id: i32,
) -> Result<entity::message::Model, DbErr> {
    MessageFactory::new(db, author_id).build().await
}
