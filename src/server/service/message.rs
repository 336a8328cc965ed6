//! Message posting, listing and deletion.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::message::MessageRepository,
    error::AppError,
    model::message::{CreateMessageParam, Message, PaginatedMessages},
};

/// Longest accepted message, in characters.
pub const MAX_MESSAGE_LENGTH: usize = 1000;
/// Largest accepted page size for message listings.
pub const MAX_PAGE_SIZE: u64 = 100;

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Posts a new message for the given author.
    ///
    /// # Returns
    /// - `Ok(Message)` - The stored message
    /// - `Err(AppError::BadRequest)` - Text empty after trimming or longer than
    ///   `MAX_MESSAGE_LENGTH`
    pub async fn create(&self, author_id: i32, text: &str) -> Result<Message, AppError> {
        let text = text.trim();

        if text.is_empty() {
            return Err(AppError::BadRequest("Message cannot be empty".to_string()));
        }
        if text.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Message cannot be longer than {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        let message = MessageRepository::new(self.db)
            .create(CreateMessageParam {
                author_id,
                message: text.to_string(),
            })
            .await?;

        tracing::debug!("User {} posted message {}", author_id, message.id);

        Ok(message)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Message>, AppError> {
        Ok(MessageRepository::new(self.db).get_by_id(id).await?)
    }

    /// Gets a page of messages, newest first.
    ///
    /// # Returns
    /// - `Ok(PaginatedMessages)` - Messages with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` is zero or above `MAX_PAGE_SIZE`, or the
    ///   page offset does not fit a SQLite `OFFSET`
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedMessages, AppError> {
        if per_page == 0 || per_page > MAX_PAGE_SIZE {
            return Err(AppError::BadRequest(format!(
                "Entries per page must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        // SQLite OFFSET is a signed 64-bit integer
        let offset_in_range = page
            .checked_mul(per_page)
            .is_some_and(|offset| offset <= i64::MAX as u64);
        if !offset_in_range {
            return Err(AppError::BadRequest(format!("Page {} is out of range", page)));
        }

        let (messages, total) = MessageRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page);

        Ok(PaginatedMessages {
            messages,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn get_by_author(&self, author_id: i32) -> Result<Vec<Message>, AppError> {
        Ok(MessageRepository::new(self.db)
            .get_by_author(author_id)
            .await?)
    }

    /// Deletes a message and its votes.
    ///
    /// # Returns
    /// - `Ok(())` - Message deleted
    /// - `Err(AppError::NotFound)` - No message with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let deleted = MessageRepository::new(self.db).delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        tracing::debug!("Deleted message {}", id);

        Ok(())
    }
}
