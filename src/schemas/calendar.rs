use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendar {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCalendarSource {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    pub oauth2_credentials: Option<serde_json::Value>,
}
