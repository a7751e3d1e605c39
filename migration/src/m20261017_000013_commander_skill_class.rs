use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_COMMANDER_SKILL_CLASS_COMMANDER_ID: &str = "fk_commander_skill_class_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommanderSkillClass::Table)
                    .if_not_exists()
                    .col(integer(CommanderSkillClass::CommanderId))
                    .col(integer(CommanderSkillClass::RoomId))
                    .col(integer(CommanderSkillClass::ShipId))
                    .col(integer(CommanderSkillClass::SkillPos))
                    .col(integer(CommanderSkillClass::SkillId))
                    .col(timestamp(CommanderSkillClass::StartTime))
                    .col(timestamp(CommanderSkillClass::FinishTime))
                    .col(integer(CommanderSkillClass::Exp).default(0))
                    .primary_key(
                        Index::create()
                            .col(CommanderSkillClass::CommanderId)
                            .col(CommanderSkillClass::RoomId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMANDER_SKILL_CLASS_COMMANDER_ID)
                            .from(CommanderSkillClass::Table, CommanderSkillClass::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommanderSkillClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommanderSkillClass {
    Table,
    CommanderId,
    RoomId,
    ShipId,
    SkillPos,
    SkillId,
    StartTime,
    FinishTime,
    Exp,
}
