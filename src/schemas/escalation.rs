use serde::Deserialize;
use validator::Validate;

/// Upper bound on extra passes through a policy's rule chain
pub const MAX_REPEAT_TIMES: i32 = 100;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePolicy {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(range(min = 0, max = MAX_REPEAT_TIMES))]
    pub repeat_times: i32,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRule {
    /// Explicit slot in the chain; appended after the last rule when absent
    pub position: Option<i32>,
    pub user_id: Option<i32>,
    pub calendar_id: Option<i32>,
    #[validate(range(min = 0))]
    pub escalate_after: i32,
}
