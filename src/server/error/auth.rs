use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("User ID is not present in session")]
    UserNotInSession,
    #[error("User ID {0:?} not found in store despite having an active session")]
    UserNotInStore(i32),
    #[error("User ID {0:?} not found")]
    UserNotFound(i32),
    #[error("Username or password did not match an account")]
    InvalidCredentials,
    #[error("Username is already registered")]
    UsernameTaken,
    #[error("Email is already registered")]
    EmailTaken,
    #[error("Account role does not permit this action")]
    PermissionDenied,
}

impl AuthError {
    fn unauthenticated() -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Authentication required".to_string(),
            }),
        )
            .into_response()
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::UserNotInSession => {
                tracing::debug!("{}", Self::UserNotInSession);

                Self::unauthenticated()
            }
            Self::UserNotInStore(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Self::unauthenticated()
            }
            Self::UserNotFound(user_id) => {
                tracing::debug!(user_id = %user_id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "User not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", Self::InvalidCredentials);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::UsernameTaken | Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::PermissionDenied => {
                tracing::debug!("{}", Self::PermissionDenied);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Insufficient permissions".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
