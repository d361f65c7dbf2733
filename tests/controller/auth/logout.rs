//! Tests for the logout endpoint.

use axum::{http::StatusCode, response::IntoResponse};
use irconnect::server::{controller::auth::logout, model::session::user::SessionUserId};
use irconnect_test_utils::prelude::*;

/// Tests that logging out clears an active session.
///
/// Expected: Ok with 200 OK response and no user ID left in the session
#[tokio::test]
async fn clears_active_session() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Tests that logging out without a session is harmless.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn succeeds_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}
