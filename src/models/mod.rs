pub mod calendar;
pub mod calendar_source;
pub mod event_log;
pub mod incident;
pub mod schedule_policy;
pub mod schedule_policy_rule;
pub mod service;
pub mod service_token;
pub mod token;
pub mod user;
pub mod user_profile;

pub mod prelude {
    pub use super::calendar::{self, Entity as Calendar};
    pub use super::calendar_source::{self, Entity as CalendarSource};
    pub use super::event_log::{self, Entity as EventLog};
    pub use super::incident::{self, Entity as Incident};
    pub use super::schedule_policy::{self, Entity as SchedulePolicy};
    pub use super::schedule_policy_rule::{self, Entity as SchedulePolicyRule};
    pub use super::service::{self, Entity as Service};
    pub use super::service_token::{self, Entity as ServiceToken};
    pub use super::token::{self, Entity as Token};
    pub use super::user::{self, Entity as User};
    pub use super::user_profile::{self, Entity as UserProfile};
}
