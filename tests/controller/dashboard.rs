//! Tests for the dashboard endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use chrono::{Duration, Utc};
use irconnect::server::{controller::dashboard::get_dashboard, model::session::user::SessionUserId};
use irconnect_test_utils::prelude::*;

/// Tests the dashboard aggregate for a logged in user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_aggregate_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let now = Utc::now();
    for offset in 0..3 {
        let when = now - Duration::days(offset);
        test.insert_event("event", when);
        test.insert_discussion("discussion", when);
        test.insert_job("job", when);
        test.insert_resource("resource", offset as i32);
        test.insert_news("news", when);
    }

    let result = get_dashboard(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 401 response without a session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn rejects_unauthenticated_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = get_dashboard(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
