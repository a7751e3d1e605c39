use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static IDX_BUILD_BUILDER_ID: &str = "idx_build_builder_id";
static FK_BUILD_BUILDER_ID: &str = "fk_build_builder_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Build::Table)
                    .if_not_exists()
                    .col(pk_auto(Build::Id))
                    .col(integer(Build::BuilderId))
                    .col(integer(Build::ShipId))
                    .col(integer(Build::PoolId))
                    .col(timestamp(Build::FinishesAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BUILD_BUILDER_ID)
                            .from(Build::Table, Build::BuilderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_BUILD_BUILDER_ID)
                    .table(Build::Table)
                    .col(Build::BuilderId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_BUILD_BUILDER_ID)
                    .table(Build::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Build::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Build {
    Table,
    Id,
    BuilderId,
    ShipId,
    PoolId,
    FinishesAt,
}
