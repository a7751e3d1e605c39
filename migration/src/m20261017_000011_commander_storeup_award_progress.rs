use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_STOREUP_AWARD_PROGRESS_COMMANDER_ID: &str = "fk_storeup_award_progress_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommanderStoreupAwardProgress::Table)
                    .if_not_exists()
                    .col(integer(CommanderStoreupAwardProgress::CommanderId))
                    .col(integer(CommanderStoreupAwardProgress::StoreupId))
                    .col(integer(CommanderStoreupAwardProgress::LastAwardIndex).default(0))
                    .primary_key(
                        Index::create()
                            .col(CommanderStoreupAwardProgress::CommanderId)
                            .col(CommanderStoreupAwardProgress::StoreupId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STOREUP_AWARD_PROGRESS_COMMANDER_ID)
                            .from(
                                CommanderStoreupAwardProgress::Table,
                                CommanderStoreupAwardProgress::CommanderId,
                            )
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(CommanderStoreupAwardProgress::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommanderStoreupAwardProgress {
    Table,
    CommanderId,
    StoreupId,
    LastAwardIndex,
}
