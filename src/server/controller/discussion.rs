use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        discussion::{CreateDiscussionDto, DiscussionDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_from_session, validate::validate_payload},
            ListParams,
        },
        data::discussion::DiscussionRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static DISCUSSION_TAG: &str = "discussion";

/// List discussions, newest first
///
/// # Responses
/// - 200 (OK): Discussions sorted by creation time descending, capped at
///   `limit` when given
#[utoipa::path(
    get,
    path = "/api/discussions",
    tag = DISCUSSION_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of discussions to return")
    ),
    responses(
        (status = 200, description = "Discussions, newest first", body = Vec<DiscussionDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_discussions(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let discussions = DiscussionRepository::new(&state.store).list(params.limit);

    let discussion_dtos: Vec<DiscussionDto> =
        discussions.into_iter().map(DiscussionDto::from).collect();

    Ok((StatusCode::OK, Json(discussion_dtos)))
}

/// Start a discussion
///
/// The authenticated user becomes the author; the reply counter and hot flag
/// are derived regardless of the payload.
///
/// # Responses
/// - 201 (Created): The stored discussion
/// - 400 (Bad Request): Payload failed validation, nothing was stored
/// - 401 (Unauthorized): No active session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    post,
    path = "/api/discussions",
    tag = DISCUSSION_TAG,
    request_body = CreateDiscussionDto,
    responses(
        (status = 201, description = "Discussion created", body = DiscussionDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discussion(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let discussion_data = validate_payload(payload)?;

    let discussion = DiscussionRepository::new(&state.store).create(discussion_data, user.id);

    Ok((StatusCode::CREATED, Json(DiscussionDto::from(discussion))))
}
