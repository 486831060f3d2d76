//! Migration: Create openduty_incident table
//!
//! `event_type` carries a CHECK constraint so that rows written outside the
//! ORM cannot hold anything but the three known lifecycle events.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Incidents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Incidents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Incidents::ServiceKeyId).uuid().not_null())
                    .col(
                        ColumnDef::new(Incidents::IncidentKey)
                            .string_len(80)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Incidents::EventType)
                            .string_len(15)
                            .not_null()
                            .check(
                                Expr::col(Incidents::EventType)
                                    .is_in(["trigger", "acknowledge", "resolve"]),
                            ),
                    )
                    .col(
                        ColumnDef::new(Incidents::Description)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Incidents::Details).text().not_null())
                    .col(
                        ColumnDef::new(Incidents::OccurredAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_incident_service")
                            .from(Incidents::Table, Incidents::ServiceKeyId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_openduty_incident_service_key_incident_key")
                    .table(Incidents::Table)
                    .col(Incidents::ServiceKeyId)
                    .col(Incidents::IncidentKey)
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Incidents::Table).if_exists().to_owned())
            .await
    }
}

#[derive(Iden)]
#[iden = "openduty_incident"]
pub enum Incidents {
    Table,
    Id,
    #[iden = "service_key_id"]
    ServiceKeyId,
    #[iden = "incident_key"]
    IncidentKey,
    #[iden = "event_type"]
    EventType,
    Description,
    Details,
    #[iden = "occurred_at"]
    OccurredAt,
}

#[derive(Iden)]
#[iden = "openduty_service"]
enum Services {
    Table,
    Id,
}
