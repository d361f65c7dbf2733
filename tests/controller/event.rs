//! Tests for the event endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, Utc};
use irconnect::server::{
    controller::{
        event::{create_event, list_events},
        ListParams,
    },
    model::session::user::SessionUserId,
};
use irconnect_test_utils::prelude::*;
use serde_json::json;

/// Tests listing events without authentication.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_events_unauthenticated() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    test.insert_event("Earnings call prep", Utc::now() + Duration::days(3));

    let result = list_events(State(test.to_app_state()), Query(ListParams { limit: None })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests that the limit parameter bounds the result.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_events_with_limit() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let now = Utc::now();
    test.insert_event("first", now + Duration::days(1));
    test.insert_event("second", now + Duration::days(2));
    test.insert_event("third", now + Duration::days(3));

    let result = list_events(
        State(test.to_app_state()),
        Query(ListParams { limit: Some(2) }),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests event creation by a logged in user.
///
/// Expected: Ok with 201 CREATED response and the event stored with the
/// session user as creator
#[tokio::test]
async fn creates_event_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    let user = test.user("aquinn");
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_event(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::event_payload("Earnings call prep")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let tables = test.store.read();
    let stored = tables.events.get(1);
    assert!(stored.is_some());
    assert_eq!(stored.unwrap().created_by, user.id);

    Ok(())
}

/// Tests that a client-supplied attendee count is ignored.
///
/// Expected: Ok with 201 CREATED response and a zero attendee count
#[tokio::test]
async fn ignores_client_supplied_attendee_count() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let mut payload = factory::event_payload("Earnings call prep");
    payload["attendeeCount"] = json!(500);
    let result = create_event(
        State(test.to_app_state()),
        test.session.clone(),
        Json(payload),
    )
    .await;

    assert!(result.is_ok());
    assert_eq!(test.store.read().events.get(1).unwrap().attendee_count, 0);

    Ok(())
}

/// Tests 401 response for event creation without a session.
///
/// Expected: Err with 401 UNAUTHORIZED response and nothing stored
#[tokio::test]
async fn rejects_unauthenticated_creation() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = create_event(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::event_payload("Earnings call prep")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(test.store.read().events.is_empty());

    Ok(())
}

/// Tests 400 response for a payload missing required fields.
///
/// Expected: Err with 400 BAD_REQUEST response and nothing stored
#[tokio::test]
async fn rejects_invalid_payload() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let result = create_event(
        State(test.to_app_state()),
        test.session.clone(),
        Json(json!({ "title": "No dates" })),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(test.store.read().events.is_empty());

    Ok(())
}
