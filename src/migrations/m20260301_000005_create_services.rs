//! Migration: Create openduty_service table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Services::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Services::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Services::Name)
                            .string_len(80)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Services::Retry).integer().null())
                    .col(ColumnDef::new(Services::PolicyId).integer().null())
                    .col(ColumnDef::new(Services::EscalateAfter).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_service_policy")
                            .from(Services::Table, Services::PolicyId)
                            .to(SchedulePolicies::Table, SchedulePolicies::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_openduty_service_policy_id")
                    .table(Services::Table)
                    .col(Services::PolicyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Services::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "openduty_service"]
pub enum Services {
    Table,
    Id,
    Name,
    Retry,
    #[iden = "policy_id"]
    PolicyId,
    #[iden = "escalate_after"]
    EscalateAfter,
}

#[derive(Iden)]
#[iden = "openduty_schedulepolicy"]
enum SchedulePolicies {
    Table,
    Id,
}
