//! The commander aggregate: an in-memory mirror of one commander's rows.
//!
//! A `Commander` is owned by a single session and discarded when the session ends. Reads
//! such as [`Commander::has_enough_resource`] are advisory; spends still go through the
//! guarded store primitives because another session may have changed the rows.

use crate::model::{
    alias::canonicalize_resource,
    cache::CacheUpdate,
    collection::IndexedCollection,
    db::{
        BuildModel, CommanderItemModel, CommanderMiscItemModel, CommanderModel, FleetModel,
        OwnedEquipmentModel, OwnedResourceModel, OwnedSkinModel, OwnedSpweaponModel,
    },
    ship::OwnedShipEntry,
};

/// Which item table holds an item for this commander.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemStore {
    /// `commander_item`, a stackable count.
    Stackable,
    /// `commander_misc_item`, a scalar counter.
    Misc,
}

#[derive(Debug, Clone)]
pub struct Commander {
    pub row: CommanderModel,
    pub resources: IndexedCollection<i32, OwnedResourceModel>,
    pub items: IndexedCollection<i32, CommanderItemModel>,
    pub misc_items: IndexedCollection<i32, CommanderMiscItemModel>,
    pub equipment: IndexedCollection<i32, OwnedEquipmentModel>,
    pub skins: IndexedCollection<i32, OwnedSkinModel>,
    pub ships: IndexedCollection<i32, OwnedShipEntry>,
    pub spweapons: IndexedCollection<i32, OwnedSpweaponModel>,
    pub fleets: IndexedCollection<i32, FleetModel>,
    pub builds: IndexedCollection<i32, BuildModel>,
}

impl Commander {
    /// Aggregate with no owned rows, as right after account creation.
    pub fn new(row: CommanderModel) -> Self {
        Self {
            row,
            resources: IndexedCollection::new(|r: &OwnedResourceModel| r.resource_id),
            items: IndexedCollection::new(|i: &CommanderItemModel| i.item_id),
            misc_items: IndexedCollection::new(|i: &CommanderMiscItemModel| i.item_id),
            equipment: IndexedCollection::new(|e: &OwnedEquipmentModel| e.equipment_id),
            skins: IndexedCollection::new(|s: &OwnedSkinModel| s.skin_id),
            ships: IndexedCollection::new(|s: &OwnedShipEntry| s.ship.id),
            spweapons: IndexedCollection::new(|w: &OwnedSpweaponModel| w.id),
            fleets: IndexedCollection::new(|f: &FleetModel| f.game_id),
            builds: IndexedCollection::new(|b: &BuildModel| b.id),
        }
    }

    pub fn id(&self) -> i32 {
        self.row.commander_id
    }

    pub fn resource_count(&self, resource_id: i32) -> i64 {
        let resource_id = canonicalize_resource(resource_id);
        self.resources
            .get(&resource_id)
            .map(|r| r.amount)
            .unwrap_or(0)
    }

    pub fn has_enough_resource(&self, resource_id: i32, amount: u32) -> bool {
        self.resource_count(resource_id) >= i64::from(amount)
    }

    /// The table an item is read from: stackable first, then misc.
    pub fn item_store(&self, item_id: i32) -> Option<ItemStore> {
        if self.items.contains(&item_id) {
            Some(ItemStore::Stackable)
        } else if self.misc_items.contains(&item_id) {
            Some(ItemStore::Misc)
        } else {
            None
        }
    }

    pub fn item_count(&self, item_id: i32) -> i64 {
        match self.item_store(item_id) {
            Some(ItemStore::Stackable) => self.items.get(&item_id).map(|i| i.count).unwrap_or(0),
            Some(ItemStore::Misc) => self
                .misc_items
                .get(&item_id)
                .map(|i| i.data)
                .unwrap_or(0),
            None => 0,
        }
    }

    pub fn has_enough_item(&self, item_id: i32, amount: u32) -> bool {
        self.item_count(item_id) >= i64::from(amount)
    }

    pub fn equipment_count(&self, equipment_id: i32) -> i64 {
        self.equipment
            .get(&equipment_id)
            .map(|e| e.count)
            .unwrap_or(0)
    }

    pub fn ship(&self, ship_id: i32) -> Option<&OwnedShipEntry> {
        self.ships.get(&ship_id)
    }

    /// Secretary ships ordered by position. Ships with no position come last.
    pub fn secretaries(&self) -> Vec<&OwnedShipEntry> {
        let mut secretaries: Vec<_> = self
            .ships
            .iter()
            .filter(|entry| entry.ship.is_secretary)
            .collect();
        secretaries.sort_by_key(|entry| {
            (
                entry.ship.secretary_position.is_none(),
                entry.ship.secretary_position,
                entry.ship.id,
            )
        });
        secretaries
    }

    pub fn build(&self, build_id: i32) -> Option<&BuildModel> {
        self.builds.get(&build_id)
    }

    pub fn apply_all(&mut self, updates: impl IntoIterator<Item = CacheUpdate>) {
        for update in updates {
            self.apply(update);
        }
    }

    /// Mirror one committed store write. Counters saturate at zero.
    pub fn apply(&mut self, update: CacheUpdate) {
        let commander_id = self.id();

        match update {
            CacheUpdate::ResourceDelta { resource_id, delta } => {
                let amount = (self.resource_count(resource_id) + delta).max(0);
                self.resources.upsert(OwnedResourceModel {
                    commander_id,
                    resource_id,
                    amount,
                });
            }
            CacheUpdate::ResourceSet {
                resource_id,
                amount,
            } => {
                self.resources.upsert(OwnedResourceModel {
                    commander_id,
                    resource_id,
                    amount,
                });
            }
            CacheUpdate::ItemDelta { item_id, delta } => {
                let current = self.items.get(&item_id).map(|i| i.count).unwrap_or(0);
                self.items.upsert(CommanderItemModel {
                    commander_id,
                    item_id,
                    count: (current + delta).max(0),
                });
            }
            CacheUpdate::ItemSet { item_id, count } => {
                self.items.upsert(CommanderItemModel {
                    commander_id,
                    item_id,
                    count,
                });
            }
            CacheUpdate::MiscItemDelta { item_id, delta } => {
                let current = self.misc_items.get(&item_id).map(|i| i.data).unwrap_or(0);
                self.misc_items.upsert(CommanderMiscItemModel {
                    commander_id,
                    item_id,
                    data: (current + delta).max(0),
                });
            }
            CacheUpdate::EquipmentDelta {
                equipment_id,
                delta,
            } => {
                let count = (self.equipment_count(equipment_id) + delta).max(0);
                self.equipment.upsert(OwnedEquipmentModel {
                    commander_id,
                    equipment_id,
                    count,
                });
            }
            CacheUpdate::SkinGranted(skin) => {
                self.skins.upsert(skin);
            }
            CacheUpdate::ShipAdded(entry) => {
                self.ships.upsert(entry);
            }
            CacheUpdate::ShipUpdated(ship) => {
                if let Some(entry) = self.ships.get_mut(&ship.id) {
                    entry.ship = ship;
                }
            }
            CacheUpdate::ShipsRemoved(ship_ids) => {
                self.ships.remove_many(&ship_ids);
            }
            CacheUpdate::BuildAdded(build) | CacheUpdate::BuildUpdated(build) => {
                self.builds.upsert(build);
            }
            CacheUpdate::BuildRemoved(build_id) => {
                self.builds.remove(&build_id);
            }
            CacheUpdate::ExchangeCount(count) => {
                self.row.exchange_count = count;
            }
        }
    }
}
