use chrono::{DateTime, Utc};
use entity::event::Event;
use serde::{Deserialize, Serialize};

/// A community event as exposed to API clients.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub is_virtual: bool,
    pub attendee_count: i32,
    pub created_by: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Event> for EventDto {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            event_type: event.event_type,
            start_date: event.start_date,
            end_date: event.end_date,
            location: event.location,
            is_virtual: event.is_virtual,
            attendee_count: event.attendee_count,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

/// Payload for creating an event.
///
/// The creator is attached from the authenticated session, never from the
/// body. `attendee_count` is derived and ignored if supplied.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventDto {
    pub title: String,
    pub description: String,
    pub event_type: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: Option<String>,
    pub is_virtual: Option<bool>,
}
