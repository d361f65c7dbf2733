//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI
/// documentation.
///
/// # Registered Endpoints
/// - `POST /api/auth/register` - Create an account and log it in
/// - `POST /api/auth/login` - Log into an existing account
/// - `POST /api/auth/logout` - Clear the current session
/// - `GET /api/auth/user` - Get the currently logged in user
/// - `PATCH /api/user/profile` - Update the logged in user's profile
/// - `GET|POST /api/events` - List and create events
/// - `GET|POST /api/discussions` - List and create discussions
/// - `GET|POST /api/jobs` - List and create job postings
/// - `GET|POST /api/resources` - List and create resources
/// - `GET|POST /api/news` - List news; publish (admin only)
/// - `GET /api/dashboard` - Combined bounded lists for the dashboard
///
/// The OpenAPI specification is served at `/api/docs/openapi.json` and
/// Swagger UI at `/api/docs`.
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to have state
/// and the session layer attached.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "IR Connect", description = "IR Connect API"), tags(
        (name = controller::auth::AUTH_TAG, description = "Authentication API routes"),
        (name = controller::user::USER_TAG, description = "User profile API routes"),
        (name = controller::event::EVENT_TAG, description = "Event API routes"),
        (name = controller::discussion::DISCUSSION_TAG, description = "Discussion API routes"),
        (name = controller::job::JOB_TAG, description = "Job marketplace API routes"),
        (name = controller::resource::RESOURCE_TAG, description = "Resource library API routes"),
        (name = controller::news::NEWS_TAG, description = "Industry news API routes"),
        (name = controller::dashboard::DASHBOARD_TAG, description = "Dashboard API routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::auth::register))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(controller::auth::current_user))
        .routes(routes!(controller::user::update_profile))
        .routes(routes!(
            controller::event::list_events,
            controller::event::create_event
        ))
        .routes(routes!(
            controller::discussion::list_discussions,
            controller::discussion::create_discussion
        ))
        .routes(routes!(
            controller::job::list_jobs,
            controller::job::create_job
        ))
        .routes(routes!(
            controller::resource::list_resources,
            controller::resource::create_resource
        ))
        .routes(routes!(
            controller::news::list_news,
            controller::news::create_news
        ))
        .routes(routes!(controller::dashboard::get_dashboard))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
