use chrono::{DateTime, Utc};

/// A community event such as a webinar, workshop, or conference.
///
/// `attendee_count` is derived by the storage layer and starts at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
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
