use sea_orm_migration::{prelude::*, schema::*};

use crate::m20261017_000001_commander::Commander;

static FK_COMMANDER_SHIP_SKILL_COMMANDER_ID: &str = "fk_commander_ship_skill_commander_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommanderShipSkill::Table)
                    .if_not_exists()
                    .col(integer(CommanderShipSkill::CommanderId))
                    .col(integer(CommanderShipSkill::ShipId))
                    .col(integer(CommanderShipSkill::SkillPos))
                    .col(integer(CommanderShipSkill::SkillId))
                    .col(integer(CommanderShipSkill::Level).default(1))
                    .col(integer(CommanderShipSkill::Exp).default(0))
                    .primary_key(
                        Index::create()
                            .col(CommanderShipSkill::CommanderId)
                            .col(CommanderShipSkill::ShipId)
                            .col(CommanderShipSkill::SkillPos),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_COMMANDER_SHIP_SKILL_COMMANDER_ID)
                            .from(CommanderShipSkill::Table, CommanderShipSkill::CommanderId)
                            .to(Commander::Table, Commander::CommanderId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommanderShipSkill::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommanderShipSkill {
    Table,
    CommanderId,
    ShipId,
    SkillPos,
    SkillId,
    Level,
    Exp,
}
