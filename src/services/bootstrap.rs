use crate::config::bootstrap::BootstrapConfig;
use crate::db::DbConn;
use crate::error::Result;
use crate::models::user;
use crate::services::accounts::{create_superuser, find_user_by_username};

pub const ROOT_USERNAME: &str = "root";

/// Outcome of the root account bootstrap
#[derive(Debug, Clone, PartialEq)]
pub enum RootBootstrap {
    Created(user::Model),
    AlreadyExists,
    Disabled,
}

/// Create the `root` superuser if it does not exist yet.
///
/// The lookup and the insert are not atomic. When two initializations race,
/// the username unique constraint rejects the loser, which is reported as
/// [`RootBootstrap::AlreadyExists`].
pub async fn ensure_root_user(db: &DbConn, config: &BootstrapConfig) -> Result<RootBootstrap> {
    if !config.root_enabled {
        tracing::debug!("Root account bootstrap disabled");
        return Ok(RootBootstrap::Disabled);
    }

    if find_user_by_username(db, ROOT_USERNAME).await?.is_some() {
        tracing::info!("Root user already exists, nothing to do");
        return Ok(RootBootstrap::AlreadyExists);
    }

    tracing::warn!("{}", "*".repeat(80));
    tracing::warn!(
        "Creating root user -- login: {}, {}",
        ROOT_USERNAME,
        config.password_source()
    );

    match create_superuser(db, ROOT_USERNAME, &config.root_email, config.password()).await {
        Ok(user) => Ok(RootBootstrap::Created(user)),
        Err(e) if e.is_conflict() => {
            tracing::info!("Root user was created concurrently, nothing to do");
            Ok(RootBootstrap::AlreadyExists)
        }
        Err(e) => Err(e),
    }
}
