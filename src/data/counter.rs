//! Guarded counter primitives shared by resources, items, misc items and equipment.
//!
//! All three mutations are single statements so concurrent spends cannot both observe a
//! sufficient balance:
//! - `decrement_if_enough`: `UPDATE .. SET v = v - n WHERE key AND v >= n`
//! - `increment_or_create`: `INSERT .. ON CONFLICT (key) DO UPDATE SET v = table.v + n`
//! - `set`: `INSERT .. ON CONFLICT (key) DO UPDATE SET v = excluded.v`

use std::marker::PhantomData;

use sea_orm::{
    sea_query::{Expr, ExprTrait, OnConflict},
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
};

/// A per-commander counter table keyed by (commander_id, key) with one `i64` value.
pub trait CounterEntity: EntityTrait {
    fn owner_column() -> Self::Column;
    fn key_column() -> Self::Column;
    fn value_column() -> Self::Column;
    fn row(commander_id: i32, key: i32, value: i64) -> Self::ActiveModel;
}

impl CounterEntity for entity::prelude::OwnedResource {
    fn owner_column() -> Self::Column {
        entity::owned_resource::Column::CommanderId
    }

    fn key_column() -> Self::Column {
        entity::owned_resource::Column::ResourceId
    }

    fn value_column() -> Self::Column {
        entity::owned_resource::Column::Amount
    }

    fn row(commander_id: i32, resource_id: i32, amount: i64) -> Self::ActiveModel {
        entity::owned_resource::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            resource_id: ActiveValue::Set(resource_id),
            amount: ActiveValue::Set(amount),
        }
    }
}

impl CounterEntity for entity::prelude::CommanderItem {
    fn owner_column() -> Self::Column {
        entity::commander_item::Column::CommanderId
    }

    fn key_column() -> Self::Column {
        entity::commander_item::Column::ItemId
    }

    fn value_column() -> Self::Column {
        entity::commander_item::Column::Count
    }

    fn row(commander_id: i32, item_id: i32, count: i64) -> Self::ActiveModel {
        entity::commander_item::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            item_id: ActiveValue::Set(item_id),
            count: ActiveValue::Set(count),
        }
    }
}

impl CounterEntity for entity::prelude::CommanderMiscItem {
    fn owner_column() -> Self::Column {
        entity::commander_misc_item::Column::CommanderId
    }

    fn key_column() -> Self::Column {
        entity::commander_misc_item::Column::ItemId
    }

    fn value_column() -> Self::Column {
        entity::commander_misc_item::Column::Data
    }

    fn row(commander_id: i32, item_id: i32, data: i64) -> Self::ActiveModel {
        entity::commander_misc_item::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            item_id: ActiveValue::Set(item_id),
            data: ActiveValue::Set(data),
        }
    }
}

impl CounterEntity for entity::prelude::OwnedEquipment {
    fn owner_column() -> Self::Column {
        entity::owned_equipment::Column::CommanderId
    }

    fn key_column() -> Self::Column {
        entity::owned_equipment::Column::EquipmentId
    }

    fn value_column() -> Self::Column {
        entity::owned_equipment::Column::Count
    }

    fn row(commander_id: i32, equipment_id: i32, count: i64) -> Self::ActiveModel {
        entity::owned_equipment::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            equipment_id: ActiveValue::Set(equipment_id),
            count: ActiveValue::Set(count),
        }
    }
}

pub type ResourceRepository<'a, C> = CounterRepository<'a, C, entity::prelude::OwnedResource>;
pub type ItemRepository<'a, C> = CounterRepository<'a, C, entity::prelude::CommanderItem>;
pub type MiscItemRepository<'a, C> =
    CounterRepository<'a, C, entity::prelude::CommanderMiscItem>;
pub type EquipmentRepository<'a, C> = CounterRepository<'a, C, entity::prelude::OwnedEquipment>;

pub struct CounterRepository<'a, C: ConnectionTrait, E: CounterEntity> {
    db: &'a C,
    entity: PhantomData<E>,
}

impl<'a, C, E> CounterRepository<'a, C, E>
where
    C: ConnectionTrait,
    E: CounterEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
{
    pub fn new(db: &'a C) -> Self {
        Self {
            db,
            entity: PhantomData,
        }
    }

    pub async fn get(&self, commander_id: i32, key: i32) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::owner_column().eq(commander_id))
            .filter(E::key_column().eq(key))
            .one(self.db)
            .await
    }

    pub async fn list(&self, commander_id: i32) -> Result<Vec<E::Model>, DbErr> {
        E::find()
            .filter(E::owner_column().eq(commander_id))
            .all(self.db)
            .await
    }

    /// Subtract `amount` only if the stored value covers it.
    ///
    /// Returns `false` when the row is missing or short; the row is then left untouched.
    pub async fn decrement_if_enough(
        &self,
        commander_id: i32,
        key: i32,
        amount: u32,
    ) -> Result<bool, DbErr> {
        let amount = i64::from(amount);

        let result = E::update_many()
            .col_expr(E::value_column(), Expr::col(E::value_column()).sub(amount))
            .filter(E::owner_column().eq(commander_id))
            .filter(E::key_column().eq(key))
            .filter(E::value_column().gte(amount))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Add `amount`, creating the row at `amount` when absent.
    pub async fn increment_or_create(
        &self,
        commander_id: i32,
        key: i32,
        amount: u32,
    ) -> Result<(), DbErr> {
        let amount = i64::from(amount);

        E::insert(E::row(commander_id, key, amount))
            .on_conflict(
                OnConflict::columns([E::owner_column(), E::key_column()])
                    .value(
                        E::value_column(),
                        Expr::col((E::default(), E::value_column())).add(amount),
                    )
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }

    /// Overwrite the stored value.
    pub async fn set(&self, commander_id: i32, key: i32, amount: u32) -> Result<(), DbErr> {
        E::insert(E::row(commander_id, key, i64::from(amount)))
            .on_conflict(
                OnConflict::columns([E::owner_column(), E::key_column()])
                    .update_column(E::value_column())
                    .to_owned(),
            )
            .exec_without_returning(self.db)
            .await?;

        Ok(())
    }
}
