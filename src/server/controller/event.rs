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
        event::{CreateEventDto, EventDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_from_session, validate::validate_payload},
            ListParams,
        },
        data::event::EventRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static EVENT_TAG: &str = "event";

/// List events, newest start date first
///
/// # Responses
/// - 200 (OK): Events sorted by start date descending, capped at `limit`
///   when given
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of events to return")
    ),
    responses(
        (status = 200, description = "Events, newest start date first", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let events = EventRepository::new(&state.store).list(params.limit);

    let event_dtos: Vec<EventDto> = events.into_iter().map(EventDto::from).collect();

    Ok((StatusCode::OK, Json(event_dtos)))
}

/// Create an event
///
/// The authenticated user becomes the event's creator; the attendee counter
/// starts at zero regardless of the payload.
///
/// # Responses
/// - 201 (Created): The stored event
/// - 400 (Bad Request): Payload failed validation, nothing was stored
/// - 401 (Unauthorized): No active session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Event created", body = EventDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_event(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let event_data = validate_payload(payload)?;

    let event = EventRepository::new(&state.store).create(event_data, user.id);

    Ok((StatusCode::CREATED, Json(EventDto::from(event))))
}
