use chrono::{DateTime, Utc};

/// A shared resource such as a report template or presentation.
///
/// `download_count` and `view_count` are derived by the storage layer and
/// start at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub resource_type: String,
    pub file_size: Option<String>,
    pub thumbnail_url: Option<String>,
    pub download_count: i32,
    pub view_count: i32,
    pub uploaded_by: i32,
    pub created_at: DateTime<Utc>,
}
