use sea_orm::{sea_query::OnConflict, ActiveValue, EntityTrait};

use crate::{
    constant::SHIP_TEMPLATE_CATEGORY, error::TestError, fixtures::factory,
    model::ConfigEntryModel, TestContext,
};

impl TestContext {
    pub fn config<'a>(&'a self) -> ConfigFixtures<'a> {
        ConfigFixtures { test: self }
    }
}

pub struct ConfigFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ConfigFixtures<'a> {
    /// Insert or replace a config document.
    pub async fn insert_config(
        &self,
        category: &str,
        key: &str,
        data: serde_json::Value,
    ) -> Result<ConfigEntryModel, TestError> {
        Ok(
            entity::prelude::ConfigEntry::insert(entity::config_entry::ActiveModel {
                category: ActiveValue::Set(category.to_string()),
                key: ActiveValue::Set(key.to_string()),
                data: ActiveValue::Set(data),
            })
            .on_conflict(
                OnConflict::columns([
                    entity::config_entry::Column::Category,
                    entity::config_entry::Column::Key,
                ])
                .update_column(entity::config_entry::Column::Data)
                .to_owned(),
            )
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }

    pub async fn insert_ship_template(
        &self,
        template_id: i32,
        rarity: i32,
        ship_type: i32,
        pool_id: i32,
        build_time: i64,
    ) -> Result<ConfigEntryModel, TestError> {
        self.insert_config(
            SHIP_TEMPLATE_CATEGORY,
            &template_id.to_string(),
            factory::mock_ship_template(template_id, rarity, ship_type, pool_id, build_time),
        )
        .await
    }
}
