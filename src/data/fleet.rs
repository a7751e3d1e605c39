use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct FleetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FleetRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        commander_id: i32,
        game_id: i32,
        name: &str,
        ship_ids: &[i32],
    ) -> Result<entity::fleet::Model, DbErr> {
        entity::fleet::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            game_id: ActiveValue::Set(game_id),
            name: ActiveValue::Set(name.to_string()),
            ship_list: ActiveValue::Set(serde_json::json!(ship_ids)),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list(&self, commander_id: i32) -> Result<Vec<entity::fleet::Model>, DbErr> {
        entity::prelude::Fleet::find()
            .filter(entity::fleet::Column::CommanderId.eq(commander_id))
            .order_by_asc(entity::fleet::Column::GameId)
            .all(self.db)
            .await
    }
}
