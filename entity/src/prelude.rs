pub use super::build::Entity as Build;
pub use super::commander::Entity as Commander;
pub use super::commander_item::Entity as CommanderItem;
pub use super::commander_misc_item::Entity as CommanderMiscItem;
pub use super::commander_ship_skill::Entity as CommanderShipSkill;
pub use super::commander_skill_class::Entity as CommanderSkillClass;
pub use super::commander_storeup_award_progress::Entity as CommanderStoreupAwardProgress;
pub use super::config_entry::Entity as ConfigEntry;
pub use super::fleet::Entity as Fleet;
pub use super::owned_equipment::Entity as OwnedEquipment;
pub use super::owned_resource::Entity as OwnedResource;
pub use super::owned_ship::Entity as OwnedShip;
pub use super::owned_skin::Entity as OwnedSkin;
pub use super::owned_spweapon::Entity as OwnedSpweapon;
