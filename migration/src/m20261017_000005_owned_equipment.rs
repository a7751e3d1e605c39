use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_OWNED_EQUIPMENT_COMMANDER_ID: &str = "fk_owned_equipment_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnedEquipment::Table)
                    .if_not_exists()
                    .col(integer(OwnedEquipment::CommanderId))
                    .col(integer(OwnedEquipment::EquipmentId))
                    .col(big_integer(OwnedEquipment::Count).default(0))
                    .primary_key(Index::create().col(OwnedEquipment::CommanderId).col(OwnedEquipment::EquipmentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_EQUIPMENT_COMMANDER_ID)
                            .from(OwnedEquipment::Table, OwnedEquipment::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OwnedEquipment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OwnedEquipment {
    Table,
    CommanderId,
    EquipmentId,
    Count,
}
