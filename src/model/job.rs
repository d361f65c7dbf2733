use chrono::{DateTime, Utc};
use entity::job::Job;
use serde::{Deserialize, Serialize};

/// A job posting as exposed to API clients.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JobDto {
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

impl From<Job> for JobDto {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            company_logo: job.company_logo,
            location: job.location,
            description: job.description,
            salary: job.salary,
            job_type: job.job_type,
            industry: job.industry,
            tags: job.tags,
            posted_by: job.posted_by,
            created_at: job.created_at,
        }
    }
}

/// Payload for posting a job. The poster is attached from the authenticated
/// session.
#[derive(Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
    pub title: String,
    pub company: String,
    pub company_logo: Option<String>,
    pub location: String,
    pub description: String,
    pub salary: Option<String>,
    pub job_type: String,
    pub industry: String,
    pub tags: Option<Vec<String>>,
}
