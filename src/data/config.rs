use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use entity::{config_entry::Column, prelude::ConfigEntry};

/// Read access to static game content stored as JSON documents.
pub struct ConfigRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get(
        &self,
        category: &str,
        key: &str,
    ) -> Result<Option<serde_json::Value>, DbErr> {
        ConfigEntry::find_by_id((category.to_string(), key.to_string()))
            .select_only()
            .column(Column::Data)
            .into_tuple::<serde_json::Value>()
            .one(self.db)
            .await
    }

    /// Fetch several keys of one category in a single query as `(key, data)` pairs.
    ///
    /// Missing keys are simply absent from the result.
    pub async fn get_many(
        &self,
        category: &str,
        keys: &[String],
    ) -> Result<Vec<(String, serde_json::Value)>, DbErr> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }

        ConfigEntry::find()
            .select_only()
            .column(Column::Key)
            .column(Column::Data)
            .filter(Column::Category.eq(category))
            .filter(Column::Key.is_in(keys.iter().cloned()))
            .into_tuple::<(String, serde_json::Value)>()
            .all(self.db)
            .await
    }

    pub async fn list(&self, category: &str) -> Result<Vec<(String, serde_json::Value)>, DbErr> {
        ConfigEntry::find()
            .select_only()
            .column(Column::Key)
            .column(Column::Data)
            .filter(Column::Category.eq(category))
            .order_by_asc(Column::Key)
            .into_tuple::<(String, serde_json::Value)>()
            .all(self.db)
            .await
    }

    pub async fn set(
        &self,
        category: &str,
        key: &str,
        data: serde_json::Value,
    ) -> Result<(), DbErr> {
        ConfigEntry::insert(entity::config_entry::ActiveModel {
            category: ActiveValue::Set(category.to_string()),
            key: ActiveValue::Set(key.to_string()),
            data: ActiveValue::Set(data),
        })
        .on_conflict(
            OnConflict::columns([Column::Category, Column::Key])
                .update_column(Column::Data)
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }
}
