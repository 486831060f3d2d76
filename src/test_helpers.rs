//! Test helpers and utilities for unit testing.

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use crate::config::bootstrap::BootstrapConfig;
use crate::migrations::Migrator;

/// Create an in-memory SQLite database with all migrations applied
pub async fn create_test_db() -> DatabaseConnection {
    // Use simple in-memory SQLite - each connection gets its own database
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run test migrations");

    db
}

/// Bootstrap settings with the root account enabled
pub fn root_enabled_config() -> BootstrapConfig {
    BootstrapConfig {
        root_enabled: true,
        ..BootstrapConfig::default()
    }
}
