//! Row model aliases shared by fixtures and factories.

pub type CommanderModel = entity::commander::Model;
pub type OwnedResourceModel = entity::owned_resource::Model;
pub type CommanderItemModel = entity::commander_item::Model;
pub type CommanderMiscItemModel = entity::commander_misc_item::Model;
pub type OwnedEquipmentModel = entity::owned_equipment::Model;
pub type OwnedShipModel = entity::owned_ship::Model;
pub type BuildModel = entity::build::Model;
pub type SkillClassModel = entity::commander_skill_class::Model;
pub type ShipSkillModel = entity::commander_ship_skill::Model;
pub type StoreupProgressModel = entity::commander_storeup_award_progress::Model;
pub type ConfigEntryModel = entity::config_entry::Model;
