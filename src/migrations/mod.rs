pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_auth_user;
mod m20260301_000002_create_schedule_calendar;
mod m20260301_000003_create_tokens;
mod m20260301_000004_create_schedule_policies;
mod m20260301_000005_create_services;
mod m20260301_000006_create_event_logs;
mod m20260301_000007_create_incidents;
mod m20260301_000008_create_service_tokens;
mod m20260301_000009_create_schedule_policy_rules;
mod m20260301_000010_create_calendar_sources;
mod m20260301_000011_create_user_profiles;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_auth_user::Migration),
            Box::new(m20260301_000002_create_schedule_calendar::Migration),
            Box::new(m20260301_000003_create_tokens::Migration),
            Box::new(m20260301_000004_create_schedule_policies::Migration),
            Box::new(m20260301_000005_create_services::Migration),
            Box::new(m20260301_000006_create_event_logs::Migration),
            Box::new(m20260301_000007_create_incidents::Migration),
            Box::new(m20260301_000008_create_service_tokens::Migration),
            Box::new(m20260301_000009_create_schedule_policy_rules::Migration),
            Box::new(m20260301_000010_create_calendar_sources::Migration),
            Box::new(m20260301_000011_create_user_profiles::Migration),
        ]
    }
}
