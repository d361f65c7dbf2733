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
        resource::{CreateResourceDto, ResourceDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_from_session, validate::validate_payload},
            ListParams,
        },
        data::resource::ResourceRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static RESOURCE_TAG: &str = "resource";

/// List resources, most downloaded first
///
/// # Responses
/// - 200 (OK): Resources sorted by download count descending, capped at
///   `limit` when given
#[utoipa::path(
    get,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of resources to return")
    ),
    responses(
        (status = 200, description = "Resources, most downloaded first", body = Vec<ResourceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_resources(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let resources = ResourceRepository::new(&state.store).list(params.limit);

    let resource_dtos: Vec<ResourceDto> = resources.into_iter().map(ResourceDto::from).collect();

    Ok((StatusCode::OK, Json(resource_dtos)))
}

/// Upload a resource
///
/// The authenticated user becomes the uploader; the download and view
/// counters start at zero regardless of the payload.
///
/// # Responses
/// - 201 (Created): The stored resource
/// - 400 (Bad Request): Payload failed validation, nothing was stored
/// - 401 (Unauthorized): No active session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    post,
    path = "/api/resources",
    tag = RESOURCE_TAG,
    request_body = CreateResourceDto,
    responses(
        (status = 201, description = "Resource created", body = ResourceDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_resource(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let resource_data = validate_payload(payload)?;

    let resource = ResourceRepository::new(&state.store).create(resource_data, user.id);

    Ok((StatusCode::CREATED, Json(ResourceDto::from(resource))))
}
