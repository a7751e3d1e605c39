use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "fleet")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub commander_id: i32,
    pub game_id: i32,
    pub name: String,
    /// JSON array of owned ship ids.
    pub ship_list: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
