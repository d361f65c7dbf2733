use chrono::{DateTime, Utc};

/// An industry news item published by an administrator.
#[derive(Clone, Debug, PartialEq)]
pub struct News {
    pub id: i32,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}
