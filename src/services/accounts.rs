//! User accounts and their profiles.
//!
//! Profiles are never created here directly: inserting a user provisions one
//! through the user entity's save hook, inside the same transaction.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait};
use validator::Validate;

use crate::db::DbConn;
use crate::error::{AppError, Result};
use crate::models::prelude::*;
use crate::models::{user, user_profile};
use crate::schemas::user::{CreateUser, UpdateProfile};
use crate::services::security::{hash_password, verify_password};

/// Create a user together with its empty profile
pub async fn create_user(db: &DbConn, req: CreateUser) -> Result<user::Model> {
    req.validate()?;

    let hashed = hash_password(&req.password)?;
    let now = Utc::now();

    let new_user = user::ActiveModel {
        password: Set(hashed),
        last_login: Set(None),
        is_superuser: Set(req.is_superuser),
        username: Set(req.username),
        first_name: Set(req.first_name),
        last_name: Set(req.last_name),
        email: Set(req.email),
        is_staff: Set(req.is_superuser),
        is_active: Set(true),
        date_joined: Set(now),
        ..Default::default()
    };

    let txn = db.begin().await?;
    let user = new_user.insert(&txn).await?;
    txn.commit().await?;

    tracing::info!("Created user {} (id {})", user.username, user.id);
    Ok(user)
}

/// Create a staff superuser
pub async fn create_superuser(
    db: &DbConn,
    username: &str,
    email: &str,
    password: &str,
) -> Result<user::Model> {
    let req = CreateUser {
        is_superuser: true,
        ..CreateUser::new(username, email, password)
    };
    create_user(db, req).await
}

pub async fn find_user_by_username(db: &DbConn, username: &str) -> Result<Option<user::Model>> {
    let user = User::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?;
    Ok(user)
}

/// Check a username/password pair; records the login time on success.
/// Inactive accounts never authenticate.
pub async fn verify_credentials(
    db: &DbConn,
    username: &str,
    password: &str,
) -> Result<Option<user::Model>> {
    let user = match find_user_by_username(db, username).await? {
        Some(user) if user.is_active => user,
        _ => return Ok(None),
    };

    if !verify_password(password, &user.password) {
        tracing::debug!("Password mismatch for user {}", username);
        return Ok(None);
    }

    let mut active: user::ActiveModel = user.into();
    active.last_login = Set(Some(Utc::now()));
    let updated = active.update(db).await?;
    Ok(Some(updated))
}

pub async fn get_profile(db: &DbConn, user_id: i32) -> Result<user_profile::Model> {
    UserProfile::find()
        .filter(user_profile::Column::UserId.eq(user_id))
        .one(db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", user_id)))
}

/// Update contact details on a user's profile
pub async fn update_profile(
    db: &DbConn,
    user_id: i32,
    req: UpdateProfile,
) -> Result<user_profile::Model> {
    req.validate()?;

    let profile = get_profile(db, user_id).await?;
    let mut active: user_profile::ActiveModel = profile.into();

    if let Some(phone_number) = req.phone_number {
        active.phone_number = Set(phone_number);
    }
    if let Some(pushover_user_key) = req.pushover_user_key {
        active.pushover_user_key = Set(pushover_user_key);
    }
    if let Some(pushover_app_key) = req.pushover_app_key {
        active.pushover_app_key = Set(pushover_app_key);
    }

    let updated = active.update(db).await?;
    Ok(updated)
}
