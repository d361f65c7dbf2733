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
        news::{CreateNewsDto, NewsDto},
    },
    server::{
        controller::{
            util::{get_user::get_user_from_session, validate::validate_payload},
            ListParams,
        },
        data::news::NewsRepository,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

pub static NEWS_TAG: &str = "news";

/// List news items, most recently published first
///
/// # Responses
/// - 200 (OK): News sorted by publication date descending, capped at `limit`
///   when given
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    params(
        ("limit" = Option<usize>, Query, description = "Maximum number of news items to return")
    ),
    responses(
        (status = 200, description = "News, most recently published first", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_news(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let news = NewsRepository::new(&state.store).list(params.limit);

    let news_dtos: Vec<NewsDto> = news.into_iter().map(NewsDto::from).collect();

    Ok((StatusCode::OK, Json(news_dtos)))
}

/// Publish a news item
///
/// Publishing requires an administrator account. Missing or non-admin
/// sessions both yield 403 and leave the collection untouched.
///
/// # Responses
/// - 201 (Created): The stored news item
/// - 400 (Bad Request): Payload failed validation, nothing was stored
/// - 403 (Forbidden): No session, or the account cannot publish news
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    request_body = CreateNewsDto,
    responses(
        (status = 201, description = "News item created", body = NewsDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = match get_user_from_session(&state, &session).await {
        Ok(user) => user,
        Err(Error::AuthError(_)) => return Err(AuthError::PermissionDenied.into()),
        Err(err) => return Err(err),
    };

    if !user.role.can_publish_news() {
        return Err(AuthError::PermissionDenied.into());
    }

    let news_data = validate_payload(payload)?;

    let news = NewsRepository::new(&state.store).create(news_data);

    Ok((StatusCode::CREATED, Json(NewsDto::from(news))))
}
