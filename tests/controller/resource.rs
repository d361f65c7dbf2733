//! Tests for the resource endpoints.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use irconnect::server::{
    controller::{
        resource::{create_resource, list_resources},
        ListParams,
    },
    model::session::user::SessionUserId,
};
use irconnect_test_utils::prelude::*;

/// Tests listing resources without authentication.
///
/// Expected: Ok with 200 OK response
#[tokio::test]
async fn lists_resources_unauthenticated() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    test.insert_resource("Annual report template", 12);

    let result =
        list_resources(State(test.to_app_state()), Query(ListParams { limit: None })).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Tests resource creation by a logged in user.
///
/// Expected: Ok with 201 CREATED response, zeroed counters, and the session
/// user as uploader
#[tokio::test]
async fn creates_resource_for_logged_in_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_user("aquinn").build()?;
    let user = test.user("aquinn");
    SessionUserId::insert(&test.session, user.id).await.unwrap();

    let result = create_resource(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::resource_payload("Annual report template")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let tables = test.store.read();
    let stored = tables.resources.get(1).unwrap();
    assert_eq!(stored.uploaded_by, user.id);
    assert_eq!(stored.download_count, 0);

    Ok(())
}

/// Tests 401 response for resource creation without a session.
///
/// Expected: Err with 401 UNAUTHORIZED response
#[tokio::test]
async fn rejects_unauthenticated_creation() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;

    let result = create_resource(
        State(test.to_app_state()),
        test.session.clone(),
        Json(factory::resource_payload("Annual report template")),
    )
    .await;

    assert!(result.is_err());
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
