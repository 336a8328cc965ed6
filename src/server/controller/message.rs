use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        message::{CreateMessageDto, MessageDto, PaginatedMessagesDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping message endpoints in OpenAPI documentation
pub static MESSAGE_TAG: &str = "message";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Messages per page, between 1 and 100.
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    10
}

/// Get paginated messages, newest first.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - Page of messages
/// - `400 Bad Request` - `entries` outside 1 to 100
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of messages", body = PaginatedMessagesDto),
        (status = 400, description = "Invalid pagination parameters", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_messages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages = MessageService::new(&state.db)
        .get_paginated(params.page, params.entries)
        .await?;

    Ok((StatusCode::OK, Json(messages.into_dto())))
}

/// Post a new message as the logged-in user.
///
/// # Returns
/// - `201 Created` - Message stored
/// - `400 Bad Request` - Message empty or too long
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/messages",
    tag = MESSAGE_TAG,
    request_body = CreateMessageDto,
    responses(
        (status = 201, description = "Message created", body = MessageDto),
        (status = 400, description = "Invalid message", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_message(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .create(user.id, &payload.message)
        .await?;

    Ok((StatusCode::CREATED, Json(message.into_dto())))
}

/// Get a single message.
///
/// # Returns
/// - `200 OK` - The message
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No message with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/messages/{message_id}",
    tag = MESSAGE_TAG,
    params(
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "The message", body = MessageDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_message(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let message = MessageService::new(&state.db)
        .get_by_id(message_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Message not found".to_string()))?;

    Ok((StatusCode::OK, Json(message.into_dto())))
}

/// Delete a message and its votes.
///
/// # Access Control
/// - `MessageAuthor` - Only the author may delete a message
///
/// # Returns
/// - `204 No Content` - Message deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is not the author
/// - `404 Not Found` - No message with that ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/messages/{message_id}",
    tag = MESSAGE_TAG,
    params(
        ("message_id" = i32, Path, description = "Message ID")
    ),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not the author", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_message(
    State(state): State<AppState>,
    session: Session,
    Path(message_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::MessageAuthor(message_id)])
        .await?;

    MessageService::new(&state.db).delete(message_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
