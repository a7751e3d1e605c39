pub use sea_orm_migration::prelude::*;

mod m20261017_000001_commander;
mod m20261017_000002_owned_resource;
mod m20261017_000003_commander_item;
mod m20261017_000004_commander_misc_item;
mod m20261017_000005_owned_equipment;
mod m20261017_000006_owned_skin;
mod m20261017_000007_owned_ship;
mod m20261017_000008_owned_spweapon;
mod m20261017_000009_fleet;
mod m20261017_000010_build;
mod m20261017_000011_commander_storeup_award_progress;
mod m20261017_000012_commander_ship_skill;
mod m20261017_000013_commander_skill_class;
mod m20261017_000014_config_entry;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261017_000001_commander::Migration),
            Box::new(m20261017_000002_owned_resource::Migration),
            Box::new(m20261017_000003_commander_item::Migration),
            Box::new(m20261017_000004_commander_misc_item::Migration),
            Box::new(m20261017_000005_owned_equipment::Migration),
            Box::new(m20261017_000006_owned_skin::Migration),
            Box::new(m20261017_000007_owned_ship::Migration),
            Box::new(m20261017_000008_owned_spweapon::Migration),
            Box::new(m20261017_000009_fleet::Migration),
            Box::new(m20261017_000010_build::Migration),
            Box::new(m20261017_000011_commander_storeup_award_progress::Migration),
            Box::new(m20261017_000012_commander_ship_skill::Migration),
            Box::new(m20261017_000013_commander_skill_class::Migration),
            Box::new(m20261017_000014_config_entry::Migration),
        ]
    }
}
