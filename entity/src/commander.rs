use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "commander")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub commander_id: i32,
    pub account_id: i32,
    #[sea_orm(unique)]
    pub name: String,
    pub level: i32,
    pub exp: i32,
    pub exchange_count: i32,
    pub last_login: DateTime,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
