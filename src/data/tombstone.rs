//! Soft deletion.
//!
//! Tombstoned rows keep their data with `deleted_at` set. Every read of live rows goes
//! through [`SoftDelete::live`] or [`SoftDelete::find_live`].

use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, Select};

pub trait SoftDelete: EntityTrait {
    fn deleted_at_column() -> Self::Column;

    /// Condition matching rows that have not been tombstoned.
    fn live() -> Condition {
        Condition::all().add(Self::deleted_at_column().is_null())
    }

    fn find_live() -> Select<Self> {
        Self::find().filter(Self::live())
    }
}

impl SoftDelete for entity::prelude::Commander {
    fn deleted_at_column() -> Self::Column {
        entity::commander::Column::DeletedAt
    }
}

impl SoftDelete for entity::prelude::OwnedShip {
    fn deleted_at_column() -> Self::Column {
        entity::owned_ship::Column::DeletedAt
    }
}
