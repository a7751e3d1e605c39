use sea_orm_migration::{prelude::*, schema::*};

static IDX_COMMANDER_ACCOUNT_ID: &str = "idx_commander_account_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commander::Table)
                    .if_not_exists()
                    .col(integer(Commander::CommanderId).primary_key())
                    .col(integer(Commander::AccountId))
                    .col(string_uniq(Commander::Name))
                    .col(integer(Commander::Level).default(1))
                    .col(integer(Commander::Exp).default(0))
                    .col(integer(Commander::ExchangeCount).default(0))
                    .col(timestamp(Commander::LastLogin))
                    .col(timestamp(Commander::CreatedAt))
                    .col(timestamp_null(Commander::DeletedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_COMMANDER_ACCOUNT_ID)
                    .table(Commander::Table)
                    .col(Commander::AccountId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_COMMANDER_ACCOUNT_ID)
                    .table(Commander::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Commander::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Commander {
    Table,
    CommanderId,
    AccountId,
    Name,
    Level,
    Exp,
    ExchangeCount,
    LastLogin,
    CreatedAt,
    DeletedAt,
}
