use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_OWNED_SKIN_COMMANDER_ID: &str = "fk_owned_skin_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnedSkin::Table)
                    .if_not_exists()
                    .col(integer(OwnedSkin::CommanderId))
                    .col(integer(OwnedSkin::SkinId))
                    .col(timestamp_null(OwnedSkin::ExpiresAt))
                    .primary_key(
                        Index::create()
                            .col(OwnedSkin::CommanderId)
                            .col(OwnedSkin::SkinId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_SKIN_COMMANDER_ID)
                            .from(OwnedSkin::Table, OwnedSkin::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OwnedSkin::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OwnedSkin {
    Table,
    CommanderId,
    SkinId,
    ExpiresAt,
}
