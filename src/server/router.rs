use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        message::{self, MESSAGE_TAG},
        user::{self, USER_TAG},
        vote::{self, VOTE_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Message Board API", description = "Post messages and vote on them"),
    tags(
        (name = AUTH_TAG, description = "Registration and session login"),
        (name = MESSAGE_TAG, description = "Posting, reading and deleting messages"),
        (name = VOTE_TAG, description = "Voting on messages"),
        (name = USER_TAG, description = "Data owned by the logged-in user")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .routes(routes!(message::get_messages, message::create_message))
        .routes(routes!(message::get_message, message::delete_message))
        .routes(routes!(vote::cast_vote))
        .routes(routes!(vote::get_vote_tally))
        .routes(routes!(user::get_user_messages))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
