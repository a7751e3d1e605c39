use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::data::tombstone::SoftDelete;

/// Owned ships. Retired ships are tombstoned and invisible to every read here.
pub struct ShipRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ShipRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Grant a fresh ship of template `ship_id` to `owner_id`
    pub async fn create(
        &self,
        owner_id: i32,
        ship_id: i32,
        now: NaiveDateTime,
    ) -> Result<entity::owned_ship::Model, DbErr> {
        let ship = entity::owned_ship::ActiveModel {
            owner_id: ActiveValue::Set(owner_id),
            ship_id: ActiveValue::Set(ship_id),
            level: ActiveValue::Set(1),
            intimacy: ActiveValue::Set(5000),
            is_locked: ActiveValue::Set(false),
            is_secretary: ActiveValue::Set(false),
            secretary_position: ActiveValue::Set(None),
            secretary_phantom_id: ActiveValue::Set(0),
            propose: ActiveValue::Set(false),
            custom_name: ActiveValue::Set(String::new()),
            change_name_timestamp: ActiveValue::Set(NaiveDateTime::UNIX_EPOCH),
            create_time: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        };

        ship.insert(self.db).await
    }

    pub async fn get_live(
        &self,
        owner_id: i32,
        id: i32,
    ) -> Result<Option<entity::owned_ship::Model>, DbErr> {
        entity::prelude::OwnedShip::find_live()
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.eq(id))
            .one(self.db)
            .await
    }

    pub async fn list_live(&self, owner_id: i32) -> Result<Vec<entity::owned_ship::Model>, DbErr> {
        entity::prelude::OwnedShip::find_live()
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::owned_ship::Column::Id)
            .all(self.db)
            .await
    }

    /// Tombstone the listed ships of `owner_id`, returning how many live ships were hit.
    pub async fn tombstone_many(
        &self,
        owner_id: i32,
        ids: &[i32],
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::DeletedAt, Expr::value(Some(now)))
            .col_expr(entity::owned_ship::Column::IsSecretary, Expr::value(false))
            .col_expr(
                entity::owned_ship::Column::SecretaryPosition,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::prelude::OwnedShip::live())
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.is_in(ids.iter().copied()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Flip the proposal flag, only if the ship is live and not yet proposed.
    pub async fn set_proposed(&self, owner_id: i32, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::Propose, Expr::value(true))
            .filter(entity::prelude::OwnedShip::live())
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.eq(id))
            .filter(entity::owned_ship::Column::Propose.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn rename(
        &self,
        owner_id: i32,
        id: i32,
        name: &str,
        cooldown_until: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::CustomName, Expr::value(name))
            .col_expr(
                entity::owned_ship::Column::ChangeNameTimestamp,
                Expr::value(cooldown_until),
            )
            .filter(entity::prelude::OwnedShip::live())
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.eq(id))
            .filter(entity::owned_ship::Column::Propose.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_locked(&self, owner_id: i32, id: i32, locked: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::IsLocked, Expr::value(locked))
            .filter(entity::prelude::OwnedShip::live())
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn clear_secretaries(&self, owner_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::IsSecretary, Expr::value(false))
            .col_expr(
                entity::owned_ship::Column::SecretaryPosition,
                Expr::value(Option::<i32>::None),
            )
            .col_expr(entity::owned_ship::Column::SecretaryPhantomId, Expr::value(0))
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::IsSecretary.eq(true))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_secretary(
        &self,
        owner_id: i32,
        id: i32,
        position: i32,
        phantom_id: i32,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::OwnedShip::update_many()
            .col_expr(entity::owned_ship::Column::IsSecretary, Expr::value(true))
            .col_expr(
                entity::owned_ship::Column::SecretaryPosition,
                Expr::value(Some(position)),
            )
            .col_expr(
                entity::owned_ship::Column::SecretaryPhantomId,
                Expr::value(phantom_id),
            )
            .filter(entity::prelude::OwnedShip::live())
            .filter(entity::owned_ship::Column::OwnerId.eq(owner_id))
            .filter(entity::owned_ship::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
