//! Tests for the discussion endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use irconnect::server::{
    controller::{
        discussion::{create_discussion, list_discussions},
        ListParams,
    },
    model::session::user::SessionUserId,
};
use irconnect_test_utils::prelude::*;
use serde_json::json;

/// Tests listing discussions without authentication.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_discussions_unauthenticated() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    test.insert_discussion("Guidance withdrawal", Utc::now());

    let result =
        list_discussions(State(test.to_app_state()), Query(ListParams { limit: None })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests discussion creation by a logged in user.
///
/// Expected: Ok with 201 CREATED response and the session user as author
#[tokio::test]
async fn creates_discussion_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    let user = test.user("aquinn");
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_discussion(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::discussion_payload("Guidance withdrawal")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let tables = test.store.read();
    assert_eq!(tables.discussions.get(1).unwrap().author_id, user.id);

    Ok(())
}

/// Tests that a payload missing the content field is rejected without
/// advancing the identifier counter.
///
/// Expected: Err with 400 BAD_REQUEST response, nothing stored, and the next
/// identifier still 1
#[tokio::test]
async fn missing_content_does_not_advance_id_counter() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let result = create_discussion(
        State(test.to_app_state()),
        test.session.clone(),
        Json(json!({
            "title": "Guidance withdrawal",
            "category": "Disclosure",
        })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    {
        let tables = test.store.read();
        assert!(tables.discussions.is_empty());
        assert_eq!(tables.discussions.next_id(), 1);
    }

    // The next valid creation still receives identifier 1
    let result = create_discussion(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::discussion_payload("Guidance withdrawal")),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(test.store.read().discussions.get(1).unwrap().id, 1);

    Ok(())
}

/// Tests 401 response for discussion creation without a session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn rejects_unauthenticated_creation() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = create_discussion(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::discussion_payload("Guidance withdrawal")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
