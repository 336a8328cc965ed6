//! Casting and tallying votes.

use sea_orm::{DatabaseConnection, SqlErr};

use crate::server::{
    data::{message::MessageRepository, vote::VoteRepository},
    error::AppError,
    model::{
        message::Message,
        vote::{CastVoteParam, VoteTally},
    },
};

pub struct VoteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a vote and returns the message with its refreshed vote count.
    ///
    /// Existence of the message is enforced by the `vote.message_id` foreign key inside
    /// the vote transaction, so a message deleted concurrently still yields 404.
    ///
    /// # Returns
    /// - `Ok(Message)` - Message after the vote was applied
    /// - `Err(AppError::NotFound)` - No message with that ID
    pub async fn cast(&self, param: CastVoteParam) -> Result<Message, AppError> {
        let message_id = param.message_id;

        let vote = match VoteRepository::new(self.db).cast(param).await {
            Ok(vote) => vote,
            Err(AppError::DbErr(err))
                if matches!(
                    err.sql_err(),
                    Some(SqlErr::ForeignKeyConstraintViolation(_))
                ) =>
            {
                return Err(AppError::NotFound("Message not found".to_string()));
            }
            Err(err) => return Err(err),
        };

        tracing::debug!(
            "User {} voted {} on message {}",
            vote.user_id,
            vote.direction.as_str(),
            message_id
        );

        MessageRepository::new(self.db)
            .get_by_id(message_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Message not found".to_string()))
    }

    /// Counts the votes recorded for a message.
    ///
    /// # Returns
    /// - `Ok(VoteTally)` - Upvote and downvote counts
    /// - `Err(AppError::NotFound)` - No message with that ID
    pub async fn tally(&self, message_id: i32) -> Result<VoteTally, AppError> {
        if MessageRepository::new(self.db)
            .get_author_id(message_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Message not found".to_string()));
        }

        Ok(VoteRepository::new(self.db).tally(message_id).await?)
    }
}
