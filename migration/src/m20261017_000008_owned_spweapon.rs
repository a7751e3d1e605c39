use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20261017_000001_commander::Commander, m20261017_000007_owned_ship::OwnedShip};

static IDX_OWNED_SPWEAPON_OWNER_ID: &str = "idx_owned_spweapon_owner_id";
static FK_OWNED_SPWEAPON_OWNER_ID: &str = "fk_owned_spweapon_owner_id";
static FK_OWNED_SPWEAPON_EQUIPPED_SHIP_ID: &str = "fk_owned_spweapon_equipped_ship_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnedSpweapon::Table)
                    .if_not_exists()
                    .col(pk_auto(OwnedSpweapon::Id))
                    .col(integer(OwnedSpweapon::OwnerId))
                    .col(integer(OwnedSpweapon::TemplateId))
                    .col(integer(OwnedSpweapon::Attr1).default(0))
                    .col(integer(OwnedSpweapon::Attr2).default(0))
                    .col(integer_null(OwnedSpweapon::EquippedShipId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_SPWEAPON_OWNER_ID)
                            .from(OwnedSpweapon::Table, OwnedSpweapon::OwnerId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_SPWEAPON_EQUIPPED_SHIP_ID)
                            .from(OwnedSpweapon::Table, OwnedSpweapon::EquippedShipId)
                            .to(OwnedShip::Table, OwnedShip::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_OWNED_SPWEAPON_OWNER_ID)
                    .table(OwnedSpweapon::Table)
                    .col(OwnedSpweapon::OwnerId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_OWNED_SPWEAPON_OWNER_ID)
                    .table(OwnedSpweapon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(OwnedSpweapon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum OwnedSpweapon {
    Table,
    Id,
    OwnerId,
    TemplateId,
    Attr1,
    Attr2,
    EquippedShipId,
}
