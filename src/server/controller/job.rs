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
        job::{CreateJobDto, JobDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_from_session, validate::validate_payload},
            ListParams,
        },
        data::job::JobRepository,
        error::Error,
        model::app::AppState,
    },
};

pub static JOB_TAG: &str = "job";

/// List job postings, newest first
///
/// # Responses
/// - 200 (OK): Jobs sorted by creation time descending, capped at `limit`
///   when given
#[utoipa::path(
    get,
    path = "/api/jobs",
    tag = JOB_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of jobs to return")
    ),
    responses(
        (status = 200, description = "Jobs, newest first", body = Vec<JobDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_jobs(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let jobs = JobRepository::new(&state.store).list(params.limit);

    let job_dtos: Vec<JobDto> = jobs.into_iter().map(JobDto::from).collect();

    Ok((StatusCode::OK, Json(job_dtos)))
}

/// Post a job
///
/// The authenticated user becomes the poster.
///
/// # Responses
/// - 201 (Created): The stored job posting
/// - 400 (Bad Request): Payload failed validation, nothing was stored
/// - 401 (Unauthorized): No active session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    post,
    path = "/api/jobs",
    tag = JOB_TAG,
    request_body = CreateJobDto,
    responses(
        (status = 201, description = "Job created", body = JobDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_job(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let job_data = validate_payload(payload)?;

    let job = JobRepository::new(&state.store).create(job_data, user.id);

    Ok((StatusCode::CREATED, Json(JobDto::from(job))))
}
