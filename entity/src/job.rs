use chrono::{DateTime, Utc};

/// A marketplace job posting.
#[derive(Clone, Debug, PartialEq)]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub industry: String,
    pub tags: Option<Vec<String>>,
    pub posted_by: i32,
    pub created_at: DateTime<Utc>,
}
