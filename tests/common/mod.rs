//! Test helpers and utilities for integration testing.
//!
//! This module provides common utilities for setting up test databases and
//! creating fixture rows through the public service API.

#![allow(dead_code)]

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use openduty::migrations::Migrator;
use openduty::models::{schedule_policy, service, user};
use openduty::schemas::escalation::CreatePolicy;
use openduty::schemas::registry::CreateService;
use openduty::schemas::user::CreateUser;
use openduty::services::{accounts, escalation, registry};

/// Create an in-memory SQLite database for testing
pub async fn create_test_db() -> DatabaseConnection {
    // Use simple in-memory SQLite - each connection gets its own database
    let db_url = "sqlite::memory:";

    let db = Database::connect(db_url)
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Create a test user through the account service
pub async fn create_test_user(db: &DatabaseConnection, username: &str) -> user::Model {
    let email = format!("{}@example.com", username);
    accounts::create_user(db, CreateUser::new(username, &email, "password123"))
        .await
        .unwrap()
}

/// Register a service with no policy attached
pub async fn create_test_service(db: &DatabaseConnection, name: &str) -> service::Model {
    registry::create_service(db, CreateService::named(name))
        .await
        .unwrap()
}

pub async fn create_test_policy(
    db: &DatabaseConnection,
    name: &str,
    repeat_times: i32,
) -> schedule_policy::Model {
    escalation::create_policy(
        db,
        CreatePolicy {
            name: name.to_string(),
            repeat_times,
        },
    )
    .await
    .unwrap()
}
