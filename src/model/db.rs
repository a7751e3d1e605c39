//! Database model type aliases.

pub type CommanderModel = entity::commander::Model;
pub type OwnedResourceModel = entity::owned_resource::Model;
pub type CommanderItemModel = entity::commander_item::Model;
pub type CommanderMiscItemModel = entity::commander_misc_item::Model;
pub type OwnedEquipmentModel = entity::owned_equipment::Model;
pub type OwnedSkinModel = entity::owned_skin::Model;

/// Owned ship row. `ship_id` is the template id, `id` is the owned instance.
pub type OwnedShipModel = entity::owned_ship::Model;
pub type OwnedSpweaponModel = entity::owned_spweapon::Model;
pub type FleetModel = entity::fleet::Model;

/// Pending construction job. `ship_id` is the template the build produces.
pub type BuildModel = entity::build::Model;

pub type StoreupProgressModel = entity::commander_storeup_award_progress::Model;
pub type SkillClassModel = entity::commander_skill_class::Model;
pub type ShipSkillModel = entity::commander_ship_skill::Model;
pub type ConfigEntryModel = entity::config_entry::Model;
