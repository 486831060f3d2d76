//! Migration: Create openduty_eventlog table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventLogs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(EventLogs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(EventLogs::ServiceKeyId).uuid().not_null())
                    .col(ColumnDef::new(EventLogs::Data).text().not_null())
                    .col(
                        ColumnDef::new(EventLogs::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_eventlog_service")
                            .from(EventLogs::Table, EventLogs::ServiceKeyId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_openduty_eventlog_service_key_id")
                    .table(EventLogs::Table)
                    .col(EventLogs::ServiceKeyId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventLogs::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "openduty_eventlog"]
pub enum EventLogs {
    Table,
    Id,
    #[iden = "service_key_id"]
    ServiceKeyId,
    Data,
    #[iden = "occurred_at"]
    OccurredAt,
}

#[derive(Iden)]
#[iden = "openduty_service"]
enum Services {
    Table,
    Id,
}
