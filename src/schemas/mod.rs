pub mod calendar;
pub mod escalation;
pub mod registry;
pub mod user;
