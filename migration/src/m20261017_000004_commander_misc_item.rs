use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_COMMANDER_MISC_ITEM_COMMANDER_ID: &str = "fk_commander_misc_item_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommanderMiscItem::Table)
                    .if_not_exists()
                    .col(integer(CommanderMiscItem::CommanderId))
                    .col(integer(CommanderMiscItem::ItemId))
                    .col(big_integer(CommanderMiscItem::Data).default(0))
                    .primary_key(Index::create().col(CommanderMiscItem::CommanderId).col(CommanderMiscItem::ItemId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMANDER_MISC_ITEM_COMMANDER_ID)
                            .from(CommanderMiscItem::Table, CommanderMiscItem::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommanderMiscItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommanderMiscItem {
    Table,
    CommanderId,
    ItemId,
    Data,
}
