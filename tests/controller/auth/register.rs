//! Tests for the register endpoint.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use irconnect::server::{controller::auth::register, model::session::user::SessionUserId};
use irconnect_test_utils::prelude::*;
use serde_json::json;

/// Tests successful registration with a minimal payload.
///
/// Expected: Ok with 201 CREATED response, the account stored, and the
/// session holding the new user's ID
#[tokio::test]
async fn creates_account_and_logs_in() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::register_payload("aquinn")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let user = test.user("aquinn");
    assert_eq!(SessionUserId::get(&test.session).await.unwrap(), Some(user.id));

    Ok(())
}

/// Tests 400 response for a payload missing a required field.
///
/// Expected: Err with 400 BAD_REQUEST response and no account stored
#[tokio::test]
async fn rejects_payload_without_email() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        Json(json!({
            "username": "aquinn",
            "password": TEST_PASSWORD,
            "fullName": "Avery Quinn",
        })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(test.store.read().users.is_empty());

    Ok(())
}

/// Tests 400 response for a username that is already registered.
///
/// Expected: Err with 400 BAD_REQUEST response and only the original
/// account stored
#[tokio::test]
async fn rejects_taken_username() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;

    let result = register(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::register_payload("aquinn")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(test.store.read().users.len(), 1);

    Ok(())
}

/// Tests 400 response when the admin role is requested.
///
/// Expected: Err with 400 BAD_REQUEST response and no account stored
#[tokio::test]
async fn rejects_admin_role_request() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let mut payload = factory::register_payload("aquinn");
    payload["role"] = json!("admin");
    let result = register(State(test.to_app_state()), test.session.clone(), Json(payload)).await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(test.store.read().users.is_empty());

    Ok(())
}
