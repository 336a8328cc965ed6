//! Vote domain models and parameters.

use chrono::{DateTime, Utc};
use std::str::FromStr;

use crate::{
    model::vote::{VoteDirectionDto, VoteTallyDto},
    server::error::internal::InternalError,
};

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    /// Value stored in the `vote.direction` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
        }
    }
}

impl FromStr for VoteDirection {
    type Err = InternalError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            other => Err(InternalError::InvalidVoteDirection(other.to_string())),
        }
    }
}

impl From<VoteDirectionDto> for VoteDirection {
    fn from(dto: VoteDirectionDto) -> Self {
        match dto {
            VoteDirectionDto::Up => Self::Up,
            VoteDirectionDto::Down => Self::Down,
        }
    }
}

/// A recorded vote.
#[derive(Debug, Clone, PartialEq)]
pub struct Vote {
    pub id: i32,
    pub message_id: i32,
    pub user_id: i32,
    pub direction: VoteDirection,
    pub created_at: DateTime<Utc>,
}

impl Vote {
    /// Converts an entity model to a vote domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Vote)` - The converted vote
    /// - `Err(InternalError::InvalidVoteDirection)` - Stored direction is not `up` or `down`
    pub fn from_entity(entity: entity::vote::Model) -> Result<Self, InternalError> {
        Ok(Self {
            id: entity.id,
            message_id: entity.message_id,
            user_id: entity.user_id,
            direction: entity.direction.parse()?,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for casting a vote on a message.
#[derive(Debug, Clone)]
pub struct CastVoteParam {
    pub message_id: i32,
    /// ID of the authenticated user casting the vote.
    pub user_id: i32,
    pub direction: VoteDirection,
}

/// Vote counts for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteTally {
    pub message_id: i32,
    pub upvotes: u64,
    pub downvotes: u64,
}

impl VoteTally {
    /// Upvotes minus downvotes.
    pub fn score(&self) -> i64 {
        self.upvotes as i64 - self.downvotes as i64
    }

    /// Score as stored in `message.vote_count`.
    ///
    /// # Returns
    /// - `Ok(i32)` - The score
    /// - `Err(InternalError::VoteCountOutOfRange)` - Score outside the `i32` range
    pub fn vote_count(&self) -> Result<i32, InternalError> {
        let score = self.score();
        i32::try_from(score).map_err(|_| InternalError::VoteCountOutOfRange(score))
    }

    pub fn into_dto(self) -> VoteTallyDto {
        VoteTallyDto {
            message_id: self.message_id,
            upvotes: self.upvotes,
            downvotes: self.downvotes,
            score: self.score(),
        }
    }
}
