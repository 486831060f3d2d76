pub mod accounts;
pub mod bootstrap;
pub mod calendars;
pub mod escalation;
pub mod registry;
pub mod security;

pub use security::*;
