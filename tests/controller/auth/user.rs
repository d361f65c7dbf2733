//! Tests for the current user endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use irconnect::server::{controller::auth::current_user, model::session::user::SessionUserId};
use irconnect_test_utils::prelude::*;

/// Tests successful retrieval of the logged in user.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn returns_current_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let result = current_user(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests 401 response when no session is active.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn fails_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = current_user(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests 401 response and session cleanup for a session pointing at a user
/// that no longer exists in the store.
///
/// Expected: Err with 401 UNAUTHORIZED response and the session cleared
#[tokio::test]
async fn clears_dangling_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    SessionUserId::insert(&test.session, 42).await.unwrap();

    let result = current_user(State(test.to_app_state()), test.session.clone()).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}
