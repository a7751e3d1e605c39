use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct BuildRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BuildRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        builder_id: i32,
        ship_id: i32,
        pool_id: i32,
        finishes_at: NaiveDateTime,
    ) -> Result<entity::build::Model, DbErr> {
        let build = entity::build::ActiveModel {
            builder_id: ActiveValue::Set(builder_id),
            ship_id: ActiveValue::Set(ship_id),
            pool_id: ActiveValue::Set(pool_id),
            finishes_at: ActiveValue::Set(finishes_at),
            ..Default::default()
        };

        build.insert(self.db).await
    }

    pub async fn get(&self, build_id: i32) -> Result<Option<entity::build::Model>, DbErr> {
        entity::prelude::Build::find_by_id(build_id)
            .one(self.db)
            .await
    }

    pub async fn list_by_builder(
        &self,
        builder_id: i32,
    ) -> Result<Vec<entity::build::Model>, DbErr> {
        entity::prelude::Build::find()
            .filter(entity::build::Column::BuilderId.eq(builder_id))
            .order_by_asc(entity::build::Column::Id)
            .all(self.db)
            .await
    }

    /// Builds of `builder_id` ordered by id, skipping `offset` and returning at most `limit`.
    pub async fn list_range(
        &self,
        builder_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<entity::build::Model>, DbErr> {
        entity::prelude::Build::find()
            .filter(entity::build::Column::BuilderId.eq(builder_id))
            .order_by_asc(entity::build::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Move the finish time of a build owned by `builder_id`.
    pub async fn set_finishes_at(
        &self,
        builder_id: i32,
        build_id: i32,
        finishes_at: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Build::update_many()
            .col_expr(entity::build::Column::FinishesAt, Expr::value(finishes_at))
            .filter(entity::build::Column::Id.eq(build_id))
            .filter(entity::build::Column::BuilderId.eq(builder_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a build owned by `builder_id`.
    ///
    /// Returns 0 when the build was already consumed, so callers racing on the same build
    /// can tell which one removed it.
    pub async fn delete_owned(&self, builder_id: i32, build_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Build::delete_many()
            .filter(entity::build::Column::Id.eq(build_id))
            .filter(entity::build::Column::BuilderId.eq(builder_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
