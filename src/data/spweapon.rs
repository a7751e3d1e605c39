use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct SpweaponRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpweaponRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        owner_id: i32,
        template_id: i32,
    ) -> Result<entity::owned_spweapon::Model, DbErr> {
        entity::owned_spweapon::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            template_id: ActiveValue::Set(template_id),
            attr1: ActiveValue::Set(0),
            attr2: ActiveValue::Set(0),
            equipped_ship_id: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn list(&self, owner_id: i32) -> Result<Vec<entity::owned_spweapon::Model>, DbErr> {
        entity::prelude::OwnedSpweapon::find()
            .filter(entity::owned_spweapon::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::owned_spweapon::Column::Id)
            .all(self.db)
            .await
    }
}
