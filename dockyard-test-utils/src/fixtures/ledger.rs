use chrono::{NaiveDateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};

use crate::{
    error::TestError,
    fixtures::factory,
    model::{
        BuildModel, CommanderItemModel, CommanderMiscItemModel, CommanderModel,
        OwnedEquipmentModel, OwnedResourceModel, OwnedShipModel, ShipSkillModel, SkillClassModel,
        StoreupProgressModel,
    },
    TestContext,
};

impl TestContext {
    pub fn ledger<'a>(&'a self) -> LedgerFixtures<'a> {
        LedgerFixtures { test: self }
    }
}

pub struct LedgerFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> LedgerFixtures<'a> {
    pub async fn insert_commander(&self, commander_id: i32) -> Result<CommanderModel, TestError> {
        Ok(factory::mock_commander_model(commander_id)
            .into_active_model()
            .reset_all()
            .insert(&self.test.db)
            .await?)
    }

    pub async fn insert_resource(
        &self,
        commander_id: i32,
        resource_id: i32,
        amount: i64,
    ) -> Result<OwnedResourceModel, TestError> {
        Ok(entity::owned_resource::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            resource_id: ActiveValue::Set(resource_id),
            amount: ActiveValue::Set(amount),
        }
        .insert(&self.test.db)
        .await?)
    }

    pub async fn insert_item(
        &self,
        commander_id: i32,
        item_id: i32,
        count: i64,
    ) -> Result<CommanderItemModel, TestError> {
        Ok(entity::commander_item::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            item_id: ActiveValue::Set(item_id),
            count: ActiveValue::Set(count),
        }
        .insert(&self.test.db)
        .await?)
    }

    pub async fn insert_misc_item(
        &self,
        commander_id: i32,
        item_id: i32,
        data: i64,
    ) -> Result<CommanderMiscItemModel, TestError> {
        Ok(entity::commander_misc_item::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            item_id: ActiveValue::Set(item_id),
            data: ActiveValue::Set(data),
        }
        .insert(&self.test.db)
        .await?)
    }

    pub async fn insert_equipment(
        &self,
        commander_id: i32,
        equipment_id: i32,
        count: i64,
    ) -> Result<OwnedEquipmentModel, TestError> {
        Ok(entity::owned_equipment::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            equipment_id: ActiveValue::Set(equipment_id),
            count: ActiveValue::Set(count),
        }
        .insert(&self.test.db)
        .await?)
    }

    /// Insert a live, unproposed ship of the given template.
    pub async fn insert_ship(
        &self,
        owner_id: i32,
        ship_id: i32,
    ) -> Result<OwnedShipModel, TestError> {
        let mut ship = factory::mock_ship_model(0, owner_id, ship_id)
            .into_active_model()
            .reset_all();
        ship.id = ActiveValue::NotSet;

        Ok(ship.insert(&self.test.db).await?)
    }

    /// Insert a proposed ship whose last rename happened at `renamed_at`.
    pub async fn insert_proposed_ship(
        &self,
        owner_id: i32,
        ship_id: i32,
        renamed_at: NaiveDateTime,
    ) -> Result<OwnedShipModel, TestError> {
        let mut ship = factory::mock_ship_model(0, owner_id, ship_id)
            .into_active_model()
            .reset_all();
        ship.id = ActiveValue::NotSet;
        ship.propose = ActiveValue::Set(true);
        ship.change_name_timestamp = ActiveValue::Set(renamed_at);

        Ok(ship.insert(&self.test.db).await?)
    }

    pub async fn insert_build(
        &self,
        builder_id: i32,
        ship_id: i32,
        finishes_at: NaiveDateTime,
    ) -> Result<BuildModel, TestError> {
        Ok(entity::build::ActiveModel {
            builder_id: ActiveValue::Set(builder_id),
            ship_id: ActiveValue::Set(ship_id),
            pool_id: ActiveValue::Set(1),
            finishes_at: ActiveValue::Set(finishes_at),
            ..Default::default()
        }
        .insert(&self.test.db)
        .await?)
    }

    pub async fn insert_storeup_progress(
        &self,
        commander_id: i32,
        storeup_id: i32,
        last_award_index: i32,
    ) -> Result<StoreupProgressModel, TestError> {
        Ok(entity::commander_storeup_award_progress::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            storeup_id: ActiveValue::Set(storeup_id),
            last_award_index: ActiveValue::Set(last_award_index),
        }
        .insert(&self.test.db)
        .await?)
    }

    pub async fn insert_ship_skill(
        &self,
        commander_id: i32,
        ship_id: i32,
        skill_pos: i32,
        skill_id: i32,
        level: i32,
    ) -> Result<ShipSkillModel, TestError> {
        Ok(entity::commander_ship_skill::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            ship_id: ActiveValue::Set(ship_id),
            skill_pos: ActiveValue::Set(skill_pos),
            skill_id: ActiveValue::Set(skill_id),
            level: ActiveValue::Set(level),
            exp: ActiveValue::Set(0),
        }
        .insert(&self.test.db)
        .await?)
    }

    /// Occupy a skill room with a class that finishes at `finish_time`.
    pub async fn insert_skill_class(
        &self,
        commander_id: i32,
        room_id: i32,
        ship_id: i32,
        finish_time: NaiveDateTime,
        exp: i32,
    ) -> Result<SkillClassModel, TestError> {
        Ok(entity::commander_skill_class::ActiveModel {
            commander_id: ActiveValue::Set(commander_id),
            room_id: ActiveValue::Set(room_id),
            ship_id: ActiveValue::Set(ship_id),
            skill_pos: ActiveValue::Set(1),
            skill_id: ActiveValue::Set(1),
            start_time: ActiveValue::Set(Utc::now().naive_utc()),
            finish_time: ActiveValue::Set(finish_time),
            exp: ActiveValue::Set(exp),
        }
        .insert(&self.test.db)
        .await?)
    }
}
