//! HTTP controller endpoints for the IR Connect web API.
//!
//! This module contains Axum handlers for authentication, profile management,
//! and the content surfaces (events, discussions, jobs, resources, news,
//! dashboard). Controllers handle HTTP requests, validate inputs, interact
//! with services and repositories, and return appropriate HTTP responses.
//! They integrate with tower-sessions for session management and use utoipa
//! for OpenAPI documentation.

pub mod auth;
pub mod dashboard;
pub mod discussion;
pub mod event;
pub mod job;
pub mod news;
pub mod resource;
pub mod user;
pub mod util;

use serde::Deserialize;

/// Query parameters shared by every list endpoint.
#[derive(Deserialize)]
pub struct ListParams {
    /// Maximum number of items to return, from the head of the sorted order.
    pub limit: Option<usize>,
}
