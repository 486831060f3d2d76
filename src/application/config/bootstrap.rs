use std::env;

pub const DEFAULT_ROOT_PASSWORD: &str = "toor";

/// Settings for the `root` account created on first initialization.
///
/// Creating an account with a well-known password is a development
/// convenience, so it stays off unless `OPENDUTY_BOOTSTRAP_ROOT=true`.
#[derive(Debug, Clone)]
pub struct BootstrapConfig {
    pub root_enabled: bool,
    /// `None` falls back to [`DEFAULT_ROOT_PASSWORD`]
    pub root_password: Option<String>,
    pub root_email: String,
}

impl BootstrapConfig {
    pub fn from_env() -> Self {
        Self {
            root_enabled: env::var("OPENDUTY_BOOTSTRAP_ROOT")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
            root_password: env::var("OPENDUTY_ROOT_PASSWORD").ok(),
            root_email: env::var("OPENDUTY_ROOT_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".to_string()),
        }
    }

    pub fn password(&self) -> &str {
        self.root_password.as_deref().unwrap_or(DEFAULT_ROOT_PASSWORD)
    }

    /// Where the root password comes from, for the creation announcement
    pub fn password_source(&self) -> &'static str {
        match self.root_password {
            Some(_) => "password from OPENDUTY_ROOT_PASSWORD",
            None => "default password",
        }
    }
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            root_enabled: false,
            root_password: None,
            root_email: "admin@localhost".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_password_uses_default() {
        let config = BootstrapConfig::default();
        assert_eq!(config.password(), DEFAULT_ROOT_PASSWORD);
        assert_eq!(config.password_source(), "default password");
    }

    #[test]
    fn test_configured_password_is_announced_as_such() {
        let config = BootstrapConfig {
            root_password: Some("s3cret".to_string()),
            ..BootstrapConfig::default()
        };
        assert_eq!(config.password(), "s3cret");
        assert_eq!(
            config.password_source(),
            "password from OPENDUTY_ROOT_PASSWORD"
        );
    }
}
