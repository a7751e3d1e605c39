//! Skill rooms and the ship skills trained in them.
//!
//! A room holds at most one class: the (commander_id, room_id) primary key makes a second
//! claim fail with a unique violation, which the service turns into a conflict.

use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use entity::prelude::{CommanderShipSkill, CommanderSkillClass};

/// A class about to occupy a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSkillClass {
    pub room_id: i32,
    pub ship_id: i32,
    pub skill_pos: i32,
    pub skill_id: i32,
    pub start_time: NaiveDateTime,
    pub finish_time: NaiveDateTime,
    pub exp: i32,
}

pub struct SkillClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkillClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Plain insert. Fails with a unique violation when the room is taken.
    pub async fn insert(
        &self,
        commander_id: i32,
        class: &NewSkillClass,
    ) -> Result<entity::commander_skill_class::Model, DbErr> {
        entity::commander_skill_class::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            room_id: ActiveValue::Set(class.room_id),
            ship_id: ActiveValue::Set(class.ship_id),
            skill_pos: ActiveValue::Set(class.skill_pos),
            skill_id: ActiveValue::Set(class.skill_id),
            start_time: ActiveValue::Set(class.start_time),
            finish_time: ActiveValue::Set(class.finish_time),
            exp: ActiveValue::Set(class.exp),
        }
        .insert(self.db)
        .await
    }

    /// `SELECT .. FOR UPDATE` on the room. Only meaningful inside a transaction.
    pub async fn lock(
        &self,
        commander_id: i32,
        room_id: i32,
    ) -> Result<Option<entity::commander_skill_class::Model>, DbErr> {
        CommanderSkillClass::find_by_id((commander_id, room_id))
            .lock_exclusive()
            .one(self.db)
            .await
    }

    pub async fn delete(&self, commander_id: i32, room_id: i32) -> Result<u64, DbErr> {
        let result = CommanderSkillClass::delete_by_id((commander_id, room_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn list(
        &self,
        commander_id: i32,
    ) -> Result<Vec<entity::commander_skill_class::Model>, DbErr> {
        CommanderSkillClass::find()
            .filter(entity::commander_skill_class::Column::CommanderId.eq(commander_id))
            .order_by_asc(entity::commander_skill_class::Column::RoomId)
            .all(self.db)
            .await
    }

    /// Return the ship skill row, creating it at level 1 when absent.
    ///
    /// Concurrent creators race on the insert; the loser's insert is ignored and both then
    /// read the same row.
    pub async fn get_or_create_ship_skill(
        &self,
        commander_id: i32,
        ship_id: i32,
        skill_pos: i32,
        skill_id: i32,
    ) -> Result<entity::commander_ship_skill::Model, DbErr> {
        CommanderShipSkill::insert(entity::commander_ship_skill::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            ship_id: ActiveValue::Set(ship_id),
            skill_pos: ActiveValue::Set(skill_pos),
            skill_id: ActiveValue::Set(skill_id),
            level: ActiveValue::Set(1),
            exp: ActiveValue::Set(0),
        })
        .on_conflict(
            OnConflict::columns([
                entity::commander_ship_skill::Column::CommanderId,
                entity::commander_ship_skill::Column::ShipId,
                entity::commander_ship_skill::Column::SkillPos,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        CommanderShipSkill::find_by_id((commander_id, ship_id, skill_pos))
            .lock_exclusive()
            .one(self.db)
            .await?
            .ok_or_else(|| {
                DbErr::RecordNotFound(format!(
                    "ship skill ({commander_id}, {ship_id}, {skill_pos})"
                ))
            })
    }

    pub async fn get_ship_skill(
        &self,
        commander_id: i32,
        ship_id: i32,
        skill_pos: i32,
    ) -> Result<Option<entity::commander_ship_skill::Model>, DbErr> {
        CommanderShipSkill::find_by_id((commander_id, ship_id, skill_pos))
            .one(self.db)
            .await
    }

    pub async fn add_ship_skill_exp(
        &self,
        commander_id: i32,
        ship_id: i32,
        skill_pos: i32,
        exp: i32,
    ) -> Result<u64, DbErr> {
        let result = CommanderShipSkill::update_many()
            .col_expr(
                entity::commander_ship_skill::Column::Exp,
                Expr::col(entity::commander_ship_skill::Column::Exp).add(exp),
            )
            .filter(entity::commander_ship_skill::Column::CommanderId.eq(commander_id))
            .filter(entity::commander_ship_skill::Column::ShipId.eq(ship_id))
            .filter(entity::commander_ship_skill::Column::SkillPos.eq(skill_pos))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
