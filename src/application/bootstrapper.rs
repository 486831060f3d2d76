//! Application bootstrapper
//!
//! Brings the database up to date and runs the one-time initialization
//! steps. There is no teardown.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::CONFIG;
use crate::db::{self, DbConn};
use crate::services::bootstrap::{ensure_root_user, RootBootstrap};

/// Bootstrap the application: migrate, then run initialization hooks
pub async fn run() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Starting OpenDuty v{}", CONFIG.version);

    let conn = db::connect().await?;
    tracing::info!("Database connection established");

    initialize(&conn).await?;

    tracing::info!("Initialization complete");
    Ok(())
}

/// Run the post-migration initialization steps against an open connection
pub async fn initialize(conn: &DbConn) -> anyhow::Result<()> {
    match ensure_root_user(conn, &CONFIG.bootstrap).await? {
        RootBootstrap::Created(user) => {
            tracing::debug!("Root user created with id {}", user.id);
        }
        RootBootstrap::AlreadyExists | RootBootstrap::Disabled => {}
    }
    Ok(())
}

/// Initialize tracing/logging
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("openduty={}", CONFIG.log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .init();
}
