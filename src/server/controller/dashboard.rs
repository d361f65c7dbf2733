use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, dashboard::DashboardDto},
    server::{
        controller::util::get_user::get_user_from_session, error::Error, model::app::AppState,
        service::dashboard::DashboardService,
    },
};

pub static DASHBOARD_TAG: &str = "dashboard";

/// Get the dashboard aggregate
///
/// Combines bounded slices of every collection into one response. There are
/// no partial results; any failure yields a 500.
///
/// # Responses
/// - 200 (OK): Bounded lists of events, discussions, jobs, resources, and news
/// - 401 (Unauthorized): No active session
/// - 500 (Internal Server Error): Session retrieval failed
#[utoipa::path(
    get,
    path = "/api/dashboard",
    tag = DASHBOARD_TAG,
    responses(
        (status = 200, description = "Dashboard aggregate", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    get_user_from_session(&state, &session).await?;

    let summary = DashboardService::new(&state.store).summary();

    Ok((StatusCode::OK, Json(summary)))
}
