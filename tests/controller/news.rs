//! Tests for the news endpoints.
//!
//! Publishing news is gated on the administrator role; these tests verify
//! both the happy path and that forbidden attempts leave the collection
//! untouched.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use irconnect::server::{
    controller::{
        news::{create_news, list_news},
        ListParams,
    },
    model::session::user::SessionUserId,
};
use irconnect_test_utils::prelude::*;

/// Tests listing news without authentication.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_news_unauthenticated() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    test.insert_news("Rule change announced", Utc::now());

    let result = list_news(State(test.to_app_state()), Query(ListParams { limit: None })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests news publication by an administrator.
///
/// Expected: Ok with 201 CREATED response
#[tokio::test]
async fn admin_publishes_news() -> Result<(), TestError> {
    let test = TestBuilder::new().with_admin("editor").build()?;
    SessionUserId::insert(&test.session, test.user("editor").id)
        .await
        .unwrap();

    let result = create_news(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::news_payload("Rule change announced")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_eq!(test.store.read().news.len(), 1);

    Ok(())
}

/// Tests 403 response for a logged in non-admin.
///
/// Expected: Err with 403 FORBIDDEN response and no mutation
#[tokio::test]
async fn forbids_non_admin_publication() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    SessionUserId::insert(&test.session, test.user("aquinn").id)
        .await
        .unwrap();

    let result = create_news(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::news_payload("Rule change announced")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(test.store.read().news.is_empty());

    Ok(())
}

/// Tests 403 response without any session.
///
/// Expected: Err with 403 FORBIDDEN response and no mutation
#[tokio::test]
async fn forbids_unauthenticated_publication() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = create_news(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::news_payload("Rule change announced")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    assert!(test.store.read().news.is_empty());

    Ok(())
}
