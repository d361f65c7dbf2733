use chrono::{DateTime, Utc};

/// A community discussion thread.
///
/// `reply_count` and `is_hot` are derived by the storage layer and start at
/// zero and false respectively.
#[derive(Clone, Debug, PartialEq)]
pub struct Discussion {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Option<Vec<String>>,
    pub author_id: i32,
    pub reply_count: i32,
    pub is_hot: bool,
    pub created_at: DateTime<Utc>,
}
