use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owned_ship")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub owner_id: i32,
    pub ship_id: i32,
    pub level: i32,
    pub intimacy: i32,
    pub is_locked: bool,
    pub is_secretary: bool,
    pub secretary_position: Option<i32>,
    pub secretary_phantom_id: i32,
    pub propose: bool,
    pub custom_name: String,
    pub change_name_timestamp: DateTime,
    pub create_time: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
