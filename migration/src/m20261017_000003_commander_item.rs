use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_COMMANDER_ITEM_COMMANDER_ID: &str = "fk_commander_item_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommanderItem::Table)
                    .if_not_exists()
                    .col(integer(CommanderItem::CommanderId))
                    .col(integer(CommanderItem::ItemId))
                    .col(big_integer(CommanderItem::Count).default(0))
                    .primary_key(Index::create().col(CommanderItem::CommanderId).col(CommanderItem::ItemId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMANDER_ITEM_COMMANDER_ID)
                            .from(CommanderItem::Table, CommanderItem::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommanderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommanderItem {
    Table,
    CommanderId,
    ItemId,
    Count,
}
