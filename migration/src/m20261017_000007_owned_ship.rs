use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static IDX_OWNED_SHIP_OWNER_ID: &str = "idx_owned_ship_owner_id";
static FK_OWNED_SHIP_OWNER_ID: &str = "fk_owned_ship_owner_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnedShip::Table)
                    .if_not_exists()
                    .col(pk_auto(OwnedShip::Id))
                    .col(integer(OwnedShip::OwnerId))
                    .col(integer(OwnedShip::ShipId))
                    .col(integer(OwnedShip::Level).default(1))
                    .col(integer(OwnedShip::Intimacy).default(5000))
                    .col(boolean(OwnedShip::IsLocked).default(false))
                    .col(boolean(OwnedShip::IsSecretary).default(false))
                    .col(integer_null(OwnedShip::SecretaryPosition))
                    .col(integer(OwnedShip::SecretaryPhantomId).default(0))
                    .col(boolean(OwnedShip::Propose).default(false))
                    .col(string(OwnedShip::CustomName).default(""))
                    .col(timestamp(OwnedShip::ChangeNameTimestamp))
                    .col(timestamp(OwnedShip::CreateTime))
                    .col(timestamp_null(OwnedShip::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_SHIP_OWNER_ID)
                            .from(OwnedShip::Table, OwnedShip::OwnerId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNED_SHIP_OWNER_ID)
                    .table(OwnedShip::Table)
                    .col(OwnedShip::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNED_SHIP_OWNER_ID)
                    .table(OwnedShip::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OwnedShip::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OwnedShip {
    Table,
    Id,
    OwnerId,
    ShipId,
    Level,
    Intimacy,
    IsLocked,
    IsSecretary,
    SecretaryPosition,
    SecretaryPhantomId,
    Propose,
    CustomName,
    ChangeNameTimestamp,
    CreateTime,
    DeletedAt,
}
