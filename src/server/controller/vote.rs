use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        message::MessageDto,
        vote::{CastVoteDto, VoteTallyDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::vote::CastVoteParam,
        service::vote::VoteService, state::AppState,
    },
};

/// Tag for grouping vote endpoints in OpenAPI documentation
pub static VOTE_TAG: &str = "vote";

/// Cast an up or down vote on a message.
///
/// Every request records a new vote; the message's vote count is recomputed in the
/// same transaction.
///
/// # Returns
/// - `201 Created` - Vote recorded, body is the updated message
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No message with that ID
/// - `422 Unprocessable Entity` - Vote direction is not `up` or `down`
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/messages/{message_id}/vote",
    tag = VOTE_TAG,
    params(
        ("message_id" = i32, Path, description = "Message ID")
    ),
    request_body = CastVoteDto,
    responses(
        (status = 201, description = "Vote recorded", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn cast_vote(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
    Json(payload): Json<CastVoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = VoteService::new(&state.db)
        .cast(CastVoteParam {
            message_id,
            user_id: user.id,
            direction: payload.vote.into(),
        })
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get the vote tally for a message.
///
/// # Returns
/// - `200 OK` - Upvotes, downvotes and score
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No message with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/{message_id}/votes",
    tag = VOTE_TAG,
    params(
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Vote tally", body = VoteTallyDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_vote_tally(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tally = VoteService::new(&state.db).tally(message_id).await?;

    Ok((StatusCode::OK, Json(tally.into_dto())))
}
