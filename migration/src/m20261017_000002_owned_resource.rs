use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_OWNED_RESOURCE_COMMANDER_ID: &str = "fk_owned_resource_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OwnedResource::Table)
                    .if_not_exists()
                    .col(integer(OwnedResource::CommanderId))
                    .col(integer(OwnedResource::ResourceId))
                    .col(big_integer(OwnedResource::Amount).default(0))
                    .primary_key(Index::create().col(OwnedResource::CommanderId).col(OwnedResource::ResourceId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_OWNED_RESOURCE_COMMANDER_ID)
                            .from(OwnedResource::Table, OwnedResource::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OwnedResource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OwnedResource {
    Table,
    CommanderId,
    ResourceId,
    Amount,
}
