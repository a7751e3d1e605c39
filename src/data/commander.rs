use chrono::NaiveDateTime;
use sea_orm::{
    sea_query::{CaseStatement, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QuerySelect,
};

use crate::data::tombstone::SoftDelete;

pub struct CommanderRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommanderRepository<'a, C> {
    /// Creates a new instance of [`CommanderRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        commander_id: i32,
        account_id: i32,
        name: &str,
        now: NaiveDateTime,
    ) -> Result<entity::commander::Model, DbErr> {
        let commander = entity::commander::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            account_id: ActiveValue::Set(account_id),
            name: ActiveValue::Set(name.to_string()),
            level: ActiveValue::Set(1),
            exp: ActiveValue::Set(0),
            exchange_count: ActiveValue::Set(0),
            last_login: ActiveValue::Set(now),
            created_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
        };

        commander.insert(self.db).await
    }

    /// Get a commander that has not been deleted
    pub async fn get_live(
        &self,
        commander_id: i32,
    ) -> Result<Option<entity::commander::Model>, DbErr> {
        entity::prelude::Commander::find_live()
            .filter(entity::commander::Column::CommanderId.eq(commander_id))
            .one(self.db)
            .await
    }

    /// Persist the mutable profile columns of a live commander.
    ///
    /// Returns the number of rows affected, 0 when the commander is missing or deleted.
    pub async fn update_profile(
        &self,
        commander: &entity::commander::Model,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Commander::update_many()
            .col_expr(
                entity::commander::Column::Name,
                Expr::value(commander.name.clone()),
            )
            .col_expr(entity::commander::Column::Level, Expr::value(commander.level))
            .col_expr(entity::commander::Column::Exp, Expr::value(commander.exp))
            .col_expr(
                entity::commander::Column::LastLogin,
                Expr::value(commander.last_login),
            )
            .filter(entity::prelude::Commander::live())
            .filter(entity::commander::Column::CommanderId.eq(commander.commander_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn set_last_login(
        &self,
        commander_id: i32,
        now: NaiveDateTime,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Commander::update_many()
            .col_expr(entity::commander::Column::LastLogin, Expr::value(now))
            .filter(entity::prelude::Commander::live())
            .filter(entity::commander::Column::CommanderId.eq(commander_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Tombstones the commander. Already deleted commanders are not touched.
    pub async fn tombstone(&self, commander_id: i32, now: NaiveDateTime) -> Result<u64, DbErr> {
        let result = entity::prelude::Commander::update_many()
            .col_expr(entity::commander::Column::DeletedAt, Expr::value(Some(now)))
            .filter(entity::prelude::Commander::live())
            .filter(entity::commander::Column::CommanderId.eq(commander_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Adds `amount` to the exchange counter, saturating at `cap`, and returns the stored value.
    pub async fn increment_exchange_count(
        &self,
        commander_id: i32,
        amount: i32,
        cap: i32,
    ) -> Result<Option<i32>, DbErr> {
        let capped = CaseStatement::new()
            .case(
                Expr::col(entity::commander::Column::ExchangeCount)
                    .add(amount)
                    .gte(cap),
                Expr::val(cap),
            )
            .finally(Expr::col(entity::commander::Column::ExchangeCount).add(amount));

        entity::prelude::Commander::update_many()
            .col_expr(entity::commander::Column::ExchangeCount, Expr::value(capped))
            .filter(entity::commander::Column::CommanderId.eq(commander_id))
            .exec(self.db)
            .await?;

        entity::prelude::Commander::find_by_id(commander_id)
            .select_only()
            .column(entity::commander::Column::ExchangeCount)
            .into_tuple::<i32>()
            .one(self.db)
            .await
    }
}
