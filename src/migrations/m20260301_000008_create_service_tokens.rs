//! Migration: Create openduty_servicetokens table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceTokens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ServiceTokens::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ServiceTokens::Name).string_len(80).not_null())
                    .col(ColumnDef::new(ServiceTokens::ServiceIdId).uuid().not_null())
                    .col(
                        ColumnDef::new(ServiceTokens::TokenIdId)
                            .string_len(40)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_servicetokens_service")
                            .from(ServiceTokens::Table, ServiceTokens::ServiceIdId)
                            .to(Services::Table, Services::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_openduty_servicetokens_token")
                            .from(ServiceTokens::Table, ServiceTokens::TokenIdId)
                            .to(Tokens::Table, Tokens::Key)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_openduty_servicetokens_token_id_id")
                    .table(ServiceTokens::Table)
                    .col(ServiceTokens::TokenIdId)
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
                    .table(ServiceTokens::Table)
                    .if_exists()
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
#[iden = "openduty_servicetokens"]
pub enum ServiceTokens {
    Table,
    Id,
    Name,
    #[iden = "service_id_id"]
    ServiceIdId,
    #[iden = "token_id_id"]
    TokenIdId,
}

#[derive(Iden)]
#[iden = "openduty_service"]
enum Services {
    Table,
    Id,
}

#[derive(Iden)]
#[iden = "openduty_token"]
enum Tokens {
    Table,
    Key,
}
