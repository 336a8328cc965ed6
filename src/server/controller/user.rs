use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, message::MessageDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::message::MessageService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get every message posted by the logged-in user, newest first.
///
/// # Returns
/// - `200 OK` - The user's messages, possibly empty
/// - `401 Unauthorized` - Not logged in
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/user/messages",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Messages by the current user", body = Vec<MessageDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_messages(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let messages: Vec<MessageDto> = MessageService::new(&state.db)
        .get_by_author(user.id)
        .await?
        .into_iter()
        .map(|m| m.into_dto())
        .collect();

    Ok((StatusCode::OK, Json(messages)))
}
