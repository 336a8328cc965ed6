//! Vote data repository.
//!
//! Recording a vote also refreshes `message.vote_count`, so the stored count always
//! equals upvotes minus downvotes.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait,
    DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    error::AppError,
    model::vote::{CastVoteParam, Vote, VoteDirection, VoteTally},
};

pub struct VoteRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VoteRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a vote and recomputes the message's vote count in one transaction.
    ///
    /// The message must exist; a missing message fails the foreign key constraint.
    ///
    /// # Returns
    /// - `Ok(Vote)` - The recorded vote
    /// - `Err(AppError::DbErr)` - Database error; the vote was not recorded
    /// - `Err(AppError::InternalErr)` - Score does not fit the stored vote count
    pub async fn cast(&self, param: CastVoteParam) -> Result<Vote, AppError> {
        let txn = self.db.begin().await?;

        let vote = entity::vote::ActiveModel {
            message_id: ActiveValue::Set(param.message_id),
            user_id: ActiveValue::Set(param.user_id),
            direction: ActiveValue::Set(param.direction.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let tally = count_votes(&txn, param.message_id).await?;

        entity::prelude::Message::update_many()
            .filter(entity::message::Column::Id.eq(param.message_id))
            .col_expr(
                entity::message::Column::VoteCount,
                Expr::value(tally.vote_count()?),
            )
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Vote::from_entity(vote)?)
    }

    /// Counts upvotes and downvotes recorded for a message.
    pub async fn tally(&self, message_id: i32) -> Result<VoteTally, DbErr> {
        count_votes(self.db, message_id).await
    }
}

async fn count_votes<C>(db: &C, message_id: i32) -> Result<VoteTally, DbErr>
where
    C: ConnectionTrait,
{
    let upvotes = count_direction(db, message_id, VoteDirection::Up).await?;
    let downvotes = count_direction(db, message_id, VoteDirection::Down).await?;

    Ok(VoteTally {
        message_id,
        upvotes,
        downvotes,
    })
}

async fn count_direction<C>(db: &C, message_id: i32, direction: VoteDirection) -> Result<u64, DbErr>
where
    C: ConnectionTrait,
{
    entity::prelude::Vote::find()
        .filter(entity::vote::Column::MessageId.eq(message_id))
        .filter(entity::vote::Column::Direction.eq(direction.as_str()))
        .count(db)
        .await
}
