//! Storeup award progress.
//!
//! Each (commander, storeup) pair tracks the highest award index claimed. The index only
//! ever moves forward by exactly one, and the move is a compare-and-set in the database so two
//! claims of the same award cannot both win.

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use entity::commander_storeup_award_progress::{ActiveModel, Column, Model};
use entity::prelude::CommanderStoreupAwardProgress;

pub struct StoreupAwardRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreupAwardRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Move the last claimed index to `target` if it currently is `target - 1`.
    ///
    /// A missing row counts as index 0, so the first award creates the row. Returns `true`
    /// only for the caller that performed the move. `target` must be positive.
    pub async fn try_advance(
        &self,
        commander_id: i32,
        storeup_id: i32,
        target: i32,
    ) -> Result<bool, DbErr> {
        if target == 1 {
            let inserted = CommanderStoreupAwardProgress::insert(ActiveModel {
                commander_id: ActiveValue::Set(commander_id),
                storeup_id: ActiveValue::Set(storeup_id),
                last_award_index: ActiveValue::Set(1),
            })
            .on_conflict(
                OnConflict::columns([Column::CommanderId, Column::StoreupId])
                    .update_column(Column::LastAwardIndex)
                    .action_and_where(
                        Expr::col((CommanderStoreupAwardProgress, Column::LastAwardIndex)).eq(0),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

            return Ok(inserted == 1);
        }

        let result = CommanderStoreupAwardProgress::update_many()
            .col_expr(Column::LastAwardIndex, Expr::value(target))
            .filter(Column::CommanderId.eq(commander_id))
            .filter(Column::StoreupId.eq(storeup_id))
            .filter(Column::LastAwardIndex.eq(target - 1))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Last claimed index, 0 when nothing was claimed yet.
    pub async fn last_index(&self, commander_id: i32, storeup_id: i32) -> Result<i32, DbErr> {
        let index = CommanderStoreupAwardProgress::find_by_id((commander_id, storeup_id))
            .select_only()
            .column(Column::LastAwardIndex)
            .into_tuple::<i32>()
            .one(self.db)
            .await?;

        Ok(index.unwrap_or(0))
    }

    pub async fn list(&self, commander_id: i32) -> Result<Vec<Model>, DbErr> {
        CommanderStoreupAwardProgress::find()
            .filter(Column::CommanderId.eq(commander_id))
            .order_by_asc(Column::StoreupId)
            .all(self.db)
            .await
    }

    /// Overwrite the progress unconditionally. Administrative use only.
    pub async fn set_index(
        &self,
        commander_id: i32,
        storeup_id: i32,
        index: i32,
    ) -> Result<(), DbErr> {
        CommanderStoreupAwardProgress::insert(ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            storeup_id: ActiveValue::Set(storeup_id),
            last_award_index: ActiveValue::Set(index),
        })
        .on_conflict(
            OnConflict::columns([Column::CommanderId, Column::StoreupId])
                .update_column(Column::LastAwardIndex)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
