use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirectionDto {
    Up,
    Down,
}

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct CastVoteDto {
    pub vote: VoteDirectionDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct VoteTallyDto {
    pub message_id: i32,
    pub upvotes: u64,
    pub downvotes: u64,
    /// Upvotes minus downvotes.
    pub score: i64,
}
