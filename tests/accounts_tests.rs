//! Account tests - user creation, automatic profile provisioning and login

mod common;

use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};

use common::{create_test_db, create_test_user};
use openduty::error::AppError;
use openduty::models::{user, user_profile};
use openduty::schemas::user::{CreateUser, UpdateProfile};
use openduty::services::accounts;

async fn profile_count(db: &sea_orm::DatabaseConnection, user_id: i32) -> u64 {
    user_profile::Entity::find()
        .filter(user_profile::Column::UserId.eq(user_id))
        .count(db)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_create_user_provisions_empty_profile() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "alice").await;

    assert_eq!(profile_count(&db, user.id).await, 1);

    let profile = accounts::get_profile(&db, user.id).await.unwrap();
    assert_eq!(profile.user_id, user.id);
    assert_eq!(profile.phone_number, "");
    assert_eq!(profile.pushover_user_key, "");
    assert_eq!(profile.pushover_app_key, "");
}

#[tokio::test]
async fn test_raw_user_insert_also_provisions_profile() {
    let db = create_test_db().await;

    let raw = user::ActiveModel {
        username: Set("bob".to_string()),
        password: Set("not-a-real-hash".to_string()),
        email: Set("bob@example.com".to_string()),
        first_name: Set(String::new()),
        last_name: Set(String::new()),
        is_superuser: Set(false),
        is_staff: Set(false),
        is_active: Set(true),
        date_joined: Set(chrono::Utc::now()),
        last_login: Set(None),
        ..Default::default()
    }
    .insert(&db)
    .await
    .unwrap();

    assert_eq!(profile_count(&db, raw.id).await, 1);
}

#[tokio::test]
async fn test_updating_user_does_not_add_profile() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "carol").await;

    let mut active: user::ActiveModel = user.clone().into();
    active.first_name = Set("Carol".to_string());
    active.update(&db).await.unwrap();

    assert_eq!(profile_count(&db, user.id).await, 1);
    assert_eq!(user_profile::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_duplicate_username_is_conflict() {
    let db = create_test_db().await;
    create_test_user(&db, "dave").await;

    let result =
        accounts::create_user(&db, CreateUser::new("dave", "other@example.com", "password123"))
            .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    // The failed insert rolled back, so no stray profile exists
    assert_eq!(user_profile::Entity::find().count(&db).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_input() {
    let db = create_test_db().await;

    let result = accounts::create_user(&db, CreateUser::new("", "x@example.com", "pw")).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(user::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_password_is_stored_hashed() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "erin").await;

    assert_ne!(user.password, "password123");
    assert!(user.password.starts_with("$2"));
}

#[tokio::test]
async fn test_verify_credentials() {
    let db = create_test_db().await;
    create_test_user(&db, "frank").await;

    let ok = accounts::verify_credentials(&db, "frank", "password123")
        .await
        .unwrap();
    let logged_in = ok.expect("credentials should match");
    assert!(logged_in.last_login.is_some());

    let wrong = accounts::verify_credentials(&db, "frank", "nope")
        .await
        .unwrap();
    assert!(wrong.is_none());

    let unknown = accounts::verify_credentials(&db, "nobody", "password123")
        .await
        .unwrap();
    assert!(unknown.is_none());
}

#[tokio::test]
async fn test_inactive_user_cannot_log_in() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "gina").await;

    let mut active: user::ActiveModel = user.into();
    active.is_active = Set(false);
    active.update(&db).await.unwrap();

    let result = accounts::verify_credentials(&db, "gina", "password123")
        .await
        .unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_update_profile_changes_only_given_fields() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "hank").await;

    let updated = accounts::update_profile(
        &db,
        user.id,
        UpdateProfile {
            phone_number: Some("+31 6 1234 5678".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.phone_number, "+31 6 1234 5678");
    assert_eq!(updated.pushover_user_key, "");

    let updated = accounts::update_profile(
        &db,
        user.id,
        UpdateProfile {
            pushover_user_key: Some("ukey".to_string()),
            pushover_app_key: Some("akey".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(updated.phone_number, "+31 6 1234 5678");
    assert_eq!(updated.pushover_user_key, "ukey");
    assert_eq!(updated.pushover_app_key, "akey");
}

#[tokio::test]
async fn test_update_profile_rejects_long_values() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "ivy").await;

    let result = accounts::update_profile(
        &db,
        user.id,
        UpdateProfile {
            phone_number: Some("9".repeat(51)),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
async fn test_get_profile_unknown_user() {
    let db = create_test_db().await;
    let result = accounts::get_profile(&db, 9999).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_find_user_by_username() {
    let db = create_test_db().await;
    let user = create_test_user(&db, "jack").await;

    let found = accounts::find_user_by_username(&db, "jack").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(user.id));
    assert!(accounts::find_user_by_username(&db, "jill")
        .await
        .unwrap()
        .is_none());
}
