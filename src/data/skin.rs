use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter,
};

pub struct SkinRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SkinRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// First claim wins: an existing skin row is left as is.
    ///
    /// Returns the number of rows inserted, 0 when the commander already owned the skin.
    pub async fn grant_if_absent(
        &self,
        commander_id: i32,
        skin_id: i32,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<u64, DbErr> {
        entity::prelude::OwnedSkin::insert(entity::owned_skin::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            skin_id: ActiveValue::Set(skin_id),
            expires_at: ActiveValue::Set(expires_at),
        })
        .on_conflict(
            OnConflict::columns([
                entity::owned_skin::Column::CommanderId,
                entity::owned_skin::Column::SkinId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await
    }

    pub async fn list(&self, commander_id: i32) -> Result<Vec<entity::owned_skin::Model>, DbErr> {
        entity::prelude::OwnedSkin::find()
            .filter(entity::owned_skin::Column::CommanderId.eq(commander_id))
            .all(self.db)
            .await
    }
}
