//! Balance mutations for a commander.
//!
//! [`Ledger`] performs the store write only and hands back the [`CacheUpdate`] describing it.
//! Run it on a transaction when a write is one step of a larger operation, then apply the
//! collected updates to the aggregate after commit. [`LedgerService`] is the single-step form:
//! it writes through the pool and mirrors the write into the aggregate right away.

use chrono::NaiveDateTime;
use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::{
    data::{
        EquipmentRepository, ItemRepository, MiscItemRepository, ResourceRepository,
        ShipRepository, SkinRepository,
    },
    error::{ledger::LedgerError, Error},
    model::{
        alias::canonicalize_resource,
        cache::CacheUpdate,
        commander::{Commander, ItemStore},
        db::OwnedSkinModel,
        ship::OwnedShipEntry,
        template::ShipTemplate,
    },
    util::time::{Clock, SystemClock},
};

/// Store writes against one commander's balances, on any connection or transaction.
pub struct Ledger<'t, C: ConnectionTrait> {
    db: &'t C,
    commander_id: i32,
}

impl<'t, C: ConnectionTrait> Ledger<'t, C> {
    pub fn new(db: &'t C, commander_id: i32) -> Self {
        Self { db, commander_id }
    }

    pub async fn add_resource(&self, resource_id: i32, amount: u32) -> Result<CacheUpdate, Error> {
        let resource_id = canonicalize_resource(resource_id);

        ResourceRepository::new(self.db)
            .increment_or_create(self.commander_id, resource_id, amount)
            .await?;

        tracing::debug!(
            "Granted {} of resource {} to commander {}",
            amount,
            resource_id,
            self.commander_id
        );

        Ok(CacheUpdate::ResourceDelta {
            resource_id,
            delta: i64::from(amount),
        })
    }

    pub async fn consume_resource(
        &self,
        resource_id: i32,
        amount: u32,
    ) -> Result<CacheUpdate, Error> {
        let resource_id = canonicalize_resource(resource_id);

        let spent = ResourceRepository::new(self.db)
            .decrement_if_enough(self.commander_id, resource_id, amount)
            .await?;
        if !spent {
            return Err(LedgerError::InsufficientResource {
                commander_id: self.commander_id,
                resource_id,
                amount,
            }
            .into());
        }

        tracing::debug!(
            "Consumed {} of resource {} from commander {}",
            amount,
            resource_id,
            self.commander_id
        );

        Ok(CacheUpdate::ResourceDelta {
            resource_id,
            delta: -i64::from(amount),
        })
    }

    pub async fn set_resource(&self, resource_id: i32, amount: u32) -> Result<CacheUpdate, Error> {
        let resource_id = canonicalize_resource(resource_id);

        ResourceRepository::new(self.db)
            .set(self.commander_id, resource_id, amount)
            .await?;

        Ok(CacheUpdate::ResourceSet {
            resource_id,
            amount: i64::from(amount),
        })
    }

    /// Grants always land in the stackable table.
    pub async fn add_item(&self, item_id: i32, amount: u32) -> Result<CacheUpdate, Error> {
        ItemRepository::new(self.db)
            .increment_or_create(self.commander_id, item_id, amount)
            .await?;

        tracing::debug!(
            "Granted {} of item {} to commander {}",
            amount,
            item_id,
            self.commander_id
        );

        Ok(CacheUpdate::ItemDelta {
            item_id,
            delta: i64::from(amount),
        })
    }

    /// Spend from the table that holds the item, stackable when the holder is unknown.
    pub async fn consume_item(
        &self,
        store: Option<ItemStore>,
        item_id: i32,
        amount: u32,
    ) -> Result<CacheUpdate, Error> {
        let (spent, update) = match store {
            Some(ItemStore::Misc) => (
                MiscItemRepository::new(self.db)
                    .decrement_if_enough(self.commander_id, item_id, amount)
                    .await?,
                CacheUpdate::MiscItemDelta {
                    item_id,
                    delta: -i64::from(amount),
                },
            ),
            Some(ItemStore::Stackable) | None => (
                ItemRepository::new(self.db)
                    .decrement_if_enough(self.commander_id, item_id, amount)
                    .await?,
                CacheUpdate::ItemDelta {
                    item_id,
                    delta: -i64::from(amount),
                },
            ),
        };

        if !spent {
            return Err(LedgerError::InsufficientItem {
                commander_id: self.commander_id,
                item_id,
                amount,
            }
            .into());
        }

        tracing::debug!(
            "Consumed {} of item {} from commander {}",
            amount,
            item_id,
            self.commander_id
        );

        Ok(update)
    }

    pub async fn set_item(&self, item_id: i32, count: u32) -> Result<CacheUpdate, Error> {
        ItemRepository::new(self.db)
            .set(self.commander_id, item_id, count)
            .await?;

        Ok(CacheUpdate::ItemSet {
            item_id,
            count: i64::from(count),
        })
    }

    pub async fn add_misc_item(&self, item_id: i32, amount: u32) -> Result<CacheUpdate, Error> {
        MiscItemRepository::new(self.db)
            .increment_or_create(self.commander_id, item_id, amount)
            .await?;

        Ok(CacheUpdate::MiscItemDelta {
            item_id,
            delta: i64::from(amount),
        })
    }

    pub async fn add_equipment(
        &self,
        equipment_id: i32,
        amount: u32,
    ) -> Result<CacheUpdate, Error> {
        EquipmentRepository::new(self.db)
            .increment_or_create(self.commander_id, equipment_id, amount)
            .await?;

        Ok(CacheUpdate::EquipmentDelta {
            equipment_id,
            delta: i64::from(amount),
        })
    }

    pub async fn consume_equipment(
        &self,
        equipment_id: i32,
        amount: u32,
    ) -> Result<CacheUpdate, Error> {
        let spent = EquipmentRepository::new(self.db)
            .decrement_if_enough(self.commander_id, equipment_id, amount)
            .await?;
        if !spent {
            return Err(LedgerError::InsufficientEquipment {
                commander_id: self.commander_id,
                equipment_id,
                amount,
            }
            .into());
        }

        Ok(CacheUpdate::EquipmentDelta {
            equipment_id,
            delta: -i64::from(amount),
        })
    }

    /// Returns `None` when the commander already owned the skin; the first grant wins.
    pub async fn give_skin(
        &self,
        skin_id: i32,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<Option<CacheUpdate>, Error> {
        let inserted = SkinRepository::new(self.db)
            .grant_if_absent(self.commander_id, skin_id, expires_at)
            .await?;
        if inserted == 0 {
            return Ok(None);
        }

        Ok(Some(CacheUpdate::SkinGranted(OwnedSkinModel {
            commander_id: self.commander_id,
            skin_id,
            expires_at,
        })))
    }

    pub async fn add_ship(
        &self,
        ship_id: i32,
        template: Option<ShipTemplate>,
        now: NaiveDateTime,
    ) -> Result<OwnedShipEntry, Error> {
        let ship = ShipRepository::new(self.db)
            .create(self.commander_id, ship_id, now)
            .await?;

        tracing::debug!(
            "Granted ship {} (template {}) to commander {}",
            ship.id,
            ship_id,
            self.commander_id
        );

        Ok(OwnedShipEntry::new(ship, template))
    }
}

/// Single-step balance mutations that keep the aggregate in step with the store.
pub struct LedgerService<'a, K: Clock = SystemClock> {
    db: &'a DatabaseConnection,
    clock: K,
}

impl<'a> LedgerService<'a> {
    /// Creates a new instance of [`LedgerService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self::with_clock(db, SystemClock)
    }
}

impl<'a, K: Clock> LedgerService<'a, K> {
    pub fn with_clock(db: &'a DatabaseConnection, clock: K) -> Self {
        Self { db, clock }
    }

    fn ledger(&self, commander: &Commander) -> Ledger<'a, DatabaseConnection> {
        Ledger::new(self.db, commander.id())
    }

    pub async fn add_resource(
        &self,
        commander: &mut Commander,
        resource_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self.ledger(commander).add_resource(resource_id, amount).await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn consume_resource(
        &self,
        commander: &mut Commander,
        resource_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self
            .ledger(commander)
            .consume_resource(resource_id, amount)
            .await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn set_resource(
        &self,
        commander: &mut Commander,
        resource_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self.ledger(commander).set_resource(resource_id, amount).await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn add_item(
        &self,
        commander: &mut Commander,
        item_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self.ledger(commander).add_item(item_id, amount).await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn consume_item(
        &self,
        commander: &mut Commander,
        item_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let store = commander.item_store(item_id);
        let update = self
            .ledger(commander)
            .consume_item(store, item_id, amount)
            .await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn set_item(
        &self,
        commander: &mut Commander,
        item_id: i32,
        count: u32,
    ) -> Result<(), Error> {
        let update = self.ledger(commander).set_item(item_id, count).await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn add_misc_item(
        &self,
        commander: &mut Commander,
        item_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self.ledger(commander).add_misc_item(item_id, amount).await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn add_equipment(
        &self,
        commander: &mut Commander,
        equipment_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self
            .ledger(commander)
            .add_equipment(equipment_id, amount)
            .await?;
        commander.apply(update);
        Ok(())
    }

    pub async fn consume_equipment(
        &self,
        commander: &mut Commander,
        equipment_id: i32,
        amount: u32,
    ) -> Result<(), Error> {
        let update = self
            .ledger(commander)
            .consume_equipment(equipment_id, amount)
            .await?;
        commander.apply(update);
        Ok(())
    }

    /// Grant a skin unless already owned.
    ///
    /// # Returns
    /// - `Ok(true)` - The skin was granted by this call
    /// - `Ok(false)` - The commander already owned the skin, nothing changed
    pub async fn give_skin(
        &self,
        commander: &mut Commander,
        skin_id: i32,
        expires_at: Option<NaiveDateTime>,
    ) -> Result<bool, Error> {
        match self.ledger(commander).give_skin(skin_id, expires_at).await? {
            Some(update) => {
                commander.apply(update);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub async fn add_ship(
        &self,
        commander: &mut Commander,
        ship_id: i32,
        template: Option<ShipTemplate>,
    ) -> Result<OwnedShipEntry, Error> {
        let entry = self
            .ledger(commander)
            .add_ship(ship_id, template, self.clock.now())
            .await?;
        commander.apply(CacheUpdate::ShipAdded(entry.clone()));

        Ok(entry)
    }
}

#[cfg(test)]
mod tests;
