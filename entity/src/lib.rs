//! Row models for the commander ledger.

pub mod prelude;

pub mod build;
pub mod commander;
pub mod commander_item;
pub mod commander_misc_item;
pub mod commander_ship_skill;
pub mod commander_skill_class;
pub mod commander_storeup_award_progress;
pub mod config_entry;
pub mod fleet;
pub mod owned_equipment;
pub mod owned_resource;
pub mod owned_ship;
pub mod owned_skin;
pub mod owned_spweapon;
