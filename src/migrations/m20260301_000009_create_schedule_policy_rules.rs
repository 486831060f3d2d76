//! Migration: Create openduty_schedulepolicyrule table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SchedulePolicyRules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SchedulePolicyRules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SchedulePolicyRules::SchedulePolicyId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SchedulePolicyRules::Position)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SchedulePolicyRules::UserIdId).integer().null())
                    .col(ColumnDef::new(SchedulePolicyRules::ScheduleId).integer().null())
                    .col(
                        ColumnDef::new(SchedulePolicyRules::EscalateAfter)
                            .integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_schedulepolicyrule_policy")
                            .from(
                                SchedulePolicyRules::Table,
                                SchedulePolicyRules::SchedulePolicyId,
                            )
                            .to(SchedulePolicies::Table, SchedulePolicies::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_schedulepolicyrule_user")
                            .from(SchedulePolicyRules::Table, SchedulePolicyRules::UserIdId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_schedulepolicyrule_schedule")
                            .from(SchedulePolicyRules::Table, SchedulePolicyRules::ScheduleId)
                            .to(ScheduleCalendar::Table, ScheduleCalendar::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_openduty_schedulepolicyrule_policy_position")
                    .table(SchedulePolicyRules::Table)
                    .col(SchedulePolicyRules::SchedulePolicyId)
                    .col(SchedulePolicyRules::Position)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(SchedulePolicyRules::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "openduty_schedulepolicyrule"]
pub enum SchedulePolicyRules {
    Table,
    Id,
    #[iden = "schedule_policy_id"]
    SchedulePolicyId,
    Position,
    #[iden = "user_id_id"]
    UserIdId,
    #[iden = "schedule_id"]
    ScheduleId,
    #[iden = "escalate_after"]
    EscalateAfter,
}

#[derive(Iden)]
#[iden = "openduty_schedulepolicy"]
enum SchedulePolicies {
    Table,
    Id,
}

#[derive(Iden)]
#[iden = "auth_user"]
enum AuthUser {
    Table,
    Id,
}

#[derive(Iden)]
#[iden = "schedule_calendar"]
enum ScheduleCalendar {
    Table,
    Id,
}
