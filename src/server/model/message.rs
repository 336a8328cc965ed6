//! Message domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::message::{MessageDto, PaginatedMessagesDto};

/// A posted message together with its author's username and current score.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: i32,
    pub author_id: i32,
    /// Username of the author, resolved through the `user` relation.
    pub author_name: String,
    pub message: String,
    /// Upvotes minus downvotes.
    pub vote_count: i32,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn into_dto(self) -> MessageDto {
        MessageDto {
            id: self.id,
            author_id: self.author_id,
            author_name: self.author_name,
            message: self.message,
            vote_count: self.vote_count,
            created_at: self.created_at,
        }
    }

    /// Converts a message entity and its optional author at the repository boundary.
    ///
    /// A missing author yields an empty `author_name`; the foreign key makes this
    /// unreachable in practice.
    pub fn from_entity(
        entity: entity::message::Model,
        author: Option<entity::user::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            author_id: entity.author_id,
            author_name: author.map(|a| a.username).unwrap_or_default(),
            message: entity.message,
            vote_count: entity.vote_count,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for posting a new message.
#[derive(Debug, Clone)]
pub struct CreateMessageParam {
    /// ID of the authenticated user posting the message.
    pub author_id: i32,
    /// Message text, already trimmed and validated.
    pub message: String,
}

/// Page of messages with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedMessages {
    pub messages: Vec<Message>,
    /// Total number of messages across all pages.
    pub total: u64,
    /// Current page number (zero-indexed).
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedMessages {
    pub fn into_dto(self) -> PaginatedMessagesDto {
        PaginatedMessagesDto {
            messages: self.messages.into_iter().map(Message::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
