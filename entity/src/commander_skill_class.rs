use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "commander_skill_class")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub commander_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: i32,
    pub ship_id: i32,
    pub skill_pos: i32,
    pub skill_id: i32,
    pub start_time: DateTime,
    pub finish_time: DateTime,
    pub exp: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
