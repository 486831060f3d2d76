use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(length(min = 1, max = 150))]
    pub username: String,
    #[serde(default)]
    #[validate(length(max = 254))]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = 150))]
    pub last_name: String,
    #[serde(default)]
    pub is_superuser: bool,
}

impl CreateUser {
    pub fn new(username: &str, email: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            first_name: String::new(),
            last_name: String::new(),
            is_superuser: false,
        }
    }
}

/// Partial update of a user's contact details
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(max = 50))]
    pub phone_number: Option<String>,
    #[validate(length(max = 50))]
    pub pushover_user_key: Option<String>,
    #[validate(length(max = 50))]
    pub pushover_app_key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_deserialize_defaults() {
        let json = r#"{"username": "alice", "password": "secret"}"#;
        let user: CreateUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "alice");
        assert!(user.email.is_empty());
        assert!(!user.is_superuser);
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_create_user_rejects_empty_username() {
        let user = CreateUser::new("", "a@example.com", "secret");
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_create_user_rejects_long_username() {
        let user = CreateUser::new(&"u".repeat(151), "", "secret");
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_update_profile_rejects_long_phone_number() {
        let update = UpdateProfile {
            phone_number: Some("1".repeat(51)),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_update_profile_empty_is_valid() {
        assert!(UpdateProfile::default().validate().is_ok());
    }
}
