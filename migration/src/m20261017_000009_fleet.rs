use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static IDX_FLEET_COMMANDER_GAME_ID: &str = "idx_fleet_commander_game_id";
static FK_FLEET_COMMANDER_ID: &str = "fk_fleet_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Fleet::Table)
                    .if_not_exists()
                    .col(pk_auto(Fleet::Id))
                    .col(integer(Fleet::CommanderId))
                    .col(integer(Fleet::GameId))
                    .col(string(Fleet::Name).default(""))
                    .col(json(Fleet::ShipList))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FLEET_COMMANDER_ID)
                            .from(Fleet::Table, Fleet::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FLEET_COMMANDER_GAME_ID)
                    .table(Fleet::Table)
                    .col(Fleet::CommanderId)
                    .col(Fleet::GameId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FLEET_COMMANDER_GAME_ID)
                    .table(Fleet::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Fleet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Fleet {
    Table,
    Id,
    CommanderId,
    GameId,
    Name,
    ShipList,
}
