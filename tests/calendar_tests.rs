//! Calendar tests - rotation calendars and OAuth2-backed calendar sources

mod common;

use serde_json::json;

use common::create_test_db;
use openduty::error::AppError;
use openduty::schemas::calendar::{CreateCalendar, CreateCalendarSource};
use openduty::services::calendars;

#[tokio::test]
async fn test_calendar_slug_is_unique() {
    let db = create_test_db().await;
    let req = CreateCalendar {
        name: "Ops".to_string(),
        slug: "ops".to_string(),
    };

    calendars::create_calendar(&db, req.clone()).await.unwrap();
    let result = calendars::create_calendar(&db, req).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_calendar_source_without_credentials() {
    let db = create_test_db().await;
    let source = calendars::create_calendar_source(
        &db,
        CreateCalendarSource {
            name: "google".to_string(),
            oauth2_credentials: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(source.oauth2_credentials, None);
    assert_eq!(calendars::calendar_credentials(&source).unwrap(), None);
}

#[tokio::test]
async fn test_update_and_read_credentials() {
    let db = create_test_db().await;
    let source = calendars::create_calendar_source(
        &db,
        CreateCalendarSource {
            name: "google".to_string(),
            oauth2_credentials: Some(json!({"access_token": "a"})),
        },
    )
    .await
    .unwrap();

    let updated = calendars::update_calendar_credentials(
        &db,
        source.id,
        json!({"access_token": "b", "refresh_token": "r"}),
    )
    .await
    .unwrap();

    let found = calendars::find_calendar_source(&db, "google")
        .await
        .unwrap()
        .expect("source should exist");
    assert_eq!(found.id, updated.id);

    let credentials = calendars::calendar_credentials(&found).unwrap().unwrap();
    assert_eq!(credentials["access_token"], "b");
    assert_eq!(credentials["refresh_token"], "r");
}

#[tokio::test]
async fn test_duplicate_calendar_source_name() {
    let db = create_test_db().await;
    let req = CreateCalendarSource {
        name: "google".to_string(),
        oauth2_credentials: None,
    };
    calendars::create_calendar_source(&db, req.clone())
        .await
        .unwrap();
    let result = calendars::create_calendar_source(&db, req).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn test_update_unknown_source() {
    let db = create_test_db().await;
    let result = calendars::update_calendar_credentials(&db, 42, json!({})).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}
