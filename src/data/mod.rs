//! Repositories over the ledger tables.
//!
//! Each repository borrows any [`sea_orm::ConnectionTrait`], so the same calls run against
//! the pool or inside a transaction. Repositories return `DbErr` and never interpret it.

pub mod build;
pub mod commander;
pub mod config;
pub mod counter;
pub mod fleet;
pub mod ship;
pub mod skill_class;
pub mod skin;
pub mod spweapon;
pub mod storeup;
pub mod tombstone;

pub use build::BuildRepository;
pub use commander::CommanderRepository;
pub use config::ConfigRepository;
pub use counter::{
    CounterRepository, EquipmentRepository, ItemRepository, MiscItemRepository,
    ResourceRepository,
};
pub use fleet::FleetRepository;
pub use ship::ShipRepository;
pub use skill_class::{NewSkillClass, SkillClassRepository};
pub use skin::SkinRepository;
pub use spweapon::SpweaponRepository;
pub use storeup::StoreupAwardRepository;

#[cfg(test)]
mod tests;
