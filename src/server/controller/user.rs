use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::Value;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{ProfileUpdateDto, UserDto},
    },
    server::{
        controller::util::{get_user::get_user_from_session, validate::validate_payload},
        data::user::UserRepository,
        error::{auth::AuthError, Error},
        model::app::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// Update the logged in user's profile
///
/// Merges the supplied fields into the profile and recomputes the profile
/// completion percentage. Absent fields are left unchanged; identity and
/// derived fields cannot be patched.
///
/// # Responses
/// - 200 (OK): The updated profile
/// - 400 (Bad Request): Payload failed validation
/// - 401 (Unauthorized): No active session
/// - 404 (Not Found): The session user no longer exists in the store
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    patch,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = ProfileUpdateDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Validation failure", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Value>,
) -> Result<impl IntoResponse, Error> {
    let user = get_user_from_session(&state, &session).await?;

    let patch = validate_payload(payload)?;

    let Some(updated) = UserRepository::new(&state.store).update(user.id, patch) else {
        return Err(AuthError::UserNotFound(user.id).into());
    };

    Ok((StatusCode::OK, Json(UserDto::from(updated))))
}
