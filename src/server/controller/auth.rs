use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, RegisterDto, UserDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, validate::validate_payload},
        error::Error,
        model::{app::AppState, session::user::SessionUserId},
        service::auth::AuthService,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Register a new account
///
/// Creates an account, logs it in by writing the user ID into the session,
/// and returns the stored profile.
///
/// # Responses
/// - 201 (Created): Account created and logged in
/// - 400 (Bad Request): Payload failed validation, or the username/email is
///   already registered
/// - 500 (Internal Server Error): Session write or password hashing failed
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = UserDto),
        (status = 400, description = "Validation failure or duplicate username/email", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let registration = validate_payload(payload)?;

    let user = AuthService::new(&state.store).register(registration)?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::CREATED, Json(UserDto::from(user))))
}

/// Log into an existing account
///
/// # Responses
/// - 200 (OK): Credentials accepted, session established
/// - 400 (Bad Request): Payload failed validation
/// - 401 (Unauthorized): Unknown username or wrong password
/// - 500 (Internal Server Error): Session write failed
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let credentials: LoginDto = validate_payload(payload)?;

    let user = AuthService::new(&state.store).login(&credentials)?;

    SessionUserId::insert(&session, user.id).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}

/// Log out by clearing the session
///
/// # Responses
/// - 200 (OK): Session cleared (or there was none to clear)
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Only clear session if there is actually a user in session
    //
    // This avoids clearing sessions which don't exist
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(StatusCode::OK)
}

/// Get the currently logged in user
///
/// # Responses
/// - 200 (OK): The account backing the active session
/// - 401 (Unauthorized): No active session, or the session no longer matches
///   an account
#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn current_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    Ok((StatusCode::OK, Json(UserDto::from(user))))
}
